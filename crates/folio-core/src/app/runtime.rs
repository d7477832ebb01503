impl<C, B, N, IN> SiteApp<C, B, N, IN>
where
    C: PostCatalog,
    B: PositionBackend,
    N: Notifier,
    IN: InputProvider,
{
    /// Build the page. Features whose host elements are missing stay unmounted.
    pub fn new(
        catalog: C,
        positions: PositionStore<B>,
        notifier: N,
        input: IN,
        surface: PageSurface,
        config: SiteConfig,
    ) -> Self {
        let post_count = catalog.post_count();
        if post_count as usize > MAX_CARDS {
            warn!(
                "app: catalog has {} posts; carousel shows the first {}",
                post_count, MAX_CARDS
            );
        }

        let carousel = if surface.carousel_mounted() {
            let item_count = post_count.min(MAX_CARDS as u16);
            Some(CarouselController::new(config.carousel, item_count, 0))
        } else {
            debug!("app: no carousel track on page");
            None
        };

        let reader = if surface.reader_mounted() {
            Some(ReaderModal::new(config.reader))
        } else {
            debug!("app: no modal root on page");
            None
        };

        Self {
            catalog,
            positions,
            notifier,
            input,
            surface,
            carousel,
            reader,
            mounted: false,
            pending_redraw: true,
        }
    }

    /// Attach to the page at the given viewport width and start timers.
    pub fn mount(&mut self, now_ms: u64, viewport_width: u32) {
        if self.mounted {
            return;
        }
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.resize(viewport_width);
            carousel.mount(now_ms);
        }
        self.mounted = true;
        self.pending_redraw = true;
        info!(
            "app: mounted carousel={} reader={} saved_positions={}",
            self.carousel.is_some(),
            self.reader.is_some(),
            self.positions.positions().len()
        );
    }

    /// Tear the page down. An open post is persisted and the timer cancelled.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if let Some(reader) = self.reader.as_mut() {
            reader.close(&mut self.positions);
        }
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.unmount();
        }
        self.mounted = false;
        info!("app: unmounted");
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if !self.mounted {
            return TickResult::NoRender;
        }

        self.process_inputs(now_ms);

        if let Some(carousel) = self.carousel.as_mut() {
            if carousel.tick(now_ms) {
                self.pending_redraw = true;
            }
        }
        if let Some(reader) = self.reader.as_mut() {
            if reader.tick(now_ms, &mut self.notifier) {
                self.pending_redraw = true;
            }
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Open the reader on `id`, as a card's read trigger would.
    pub fn open_post(&mut self, id: &str, now_ms: u64) -> bool {
        let Some(reader) = self.reader.as_mut() else {
            debug!("app: open ignored; reader not mounted id={}", id);
            return false;
        };
        let opened = reader.open(id, &self.catalog, &mut self.positions, now_ms);
        if opened {
            self.pending_redraw = true;
        }
        opened
    }

    /// Earliest time a timer inside the page wants a tick, if any.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        if !self.mounted {
            return None;
        }
        let carousel_due = self.carousel.as_ref().and_then(|carousel| match carousel.timer() {
            AutoAdvance::Scheduled { due_ms } => Some(due_ms),
            AutoAdvance::Unmounted | AutoAdvance::Paused => None,
        });
        let reader_due = self.reader.as_ref().and_then(ReaderModal::restore_due_ms);
        match (carousel_due, reader_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (due, None) | (None, due) => due,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Background scroll lock, held while the reader is open.
    pub fn page_scroll_locked(&self) -> bool {
        self.reader.as_ref().is_some_and(ReaderModal::is_open)
    }

    pub fn surface(&self) -> PageSurface {
        self.surface
    }

    pub fn carousel(&self) -> Option<&CarouselController> {
        self.carousel.as_ref()
    }

    pub fn reader(&self) -> Option<&ReaderModal> {
        self.reader.as_ref()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn positions(&self) -> &PositionStore<B> {
        &self.positions
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn input(&self) -> &IN {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    /// Consume the app, handing the position backend back to the host.
    pub fn into_backend(self) -> B {
        self.positions.into_backend()
    }
}
