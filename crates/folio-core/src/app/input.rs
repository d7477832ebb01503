impl<C, B, N, IN> SiteApp<C, B, N, IN>
where
    C: PostCatalog,
    B: PositionBackend,
    N: Notifier,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("app: input provider failed; dropping remaining events this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        let changed = match event {
            InputEvent::Resize { .. }
            | InputEvent::PrevClicked
            | InputEvent::NextClicked
            | InputEvent::IndicatorClicked { .. }
            | InputEvent::PointerEnter
            | InputEvent::PointerLeave => self.apply_carousel_input(event, now_ms),
            InputEvent::ReadClicked { index } => {
                match self.catalog.post_at(index).map(|post| post.id) {
                    Some(id) => self.open_post(id, now_ms),
                    None => {
                        debug!("app: read trigger for missing card index={}", index);
                        false
                    }
                }
            }
            InputEvent::ModalScroll { .. }
            | InputEvent::ModalClick(_)
            | InputEvent::KeyDown(_) => self.apply_reader_input(event),
        };

        if changed {
            self.pending_redraw = true;
        }
    }

    fn apply_carousel_input(&mut self, event: InputEvent, now_ms: u64) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            debug!("app: carousel not mounted; ignoring {:?}", event);
            return false;
        };

        match event {
            InputEvent::Resize { width } => carousel.resize(width),
            InputEvent::PrevClicked if self.surface.prev_control => carousel.previous(),
            InputEvent::NextClicked if self.surface.next_control => carousel.next(),
            InputEvent::IndicatorClicked { page } if self.surface.indicators => {
                carousel.go_to(page)
            }
            InputEvent::PointerEnter => {
                carousel.pointer_enter();
                true
            }
            InputEvent::PointerLeave => {
                carousel.pointer_leave(now_ms);
                true
            }
            _ => {
                debug!("app: no page element for {:?}", event);
                false
            }
        }
    }

    fn apply_reader_input(&mut self, event: InputEvent) -> bool {
        let Some(reader) = self.reader.as_mut() else {
            debug!("app: reader not mounted; ignoring {:?}", event);
            return false;
        };

        match event {
            InputEvent::ModalScroll { offset } => reader.scroll(offset, &mut self.positions),
            InputEvent::ModalClick(click) => {
                reader.handle_click(click, &mut self.positions, &mut self.notifier)
            }
            InputEvent::KeyDown(key) => {
                reader.handle_key(key, &mut self.positions, &mut self.notifier)
            }
            _ => false,
        }
    }
}
