impl<C, B, N, IN> SiteApp<C, B, N, IN>
where
    C: PostCatalog,
    B: PositionBackend,
    N: Notifier,
    IN: InputProvider,
{
    /// Build the current view model and hand it to `f`.
    ///
    /// Card and header text is shaped into stack buffers that only live for
    /// the duration of the call.
    pub fn with_screen<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Screen<'_>) -> R,
    {
        let card_count = self
            .carousel
            .as_ref()
            .map(CarouselController::item_count)
            .unwrap_or(0);

        let mut date_labels: Vec<DateLabel, MAX_CARDS> = Vec::new();
        let mut teasers: Vec<Teaser, MAX_CARDS> = Vec::new();
        for index in 0..card_count {
            let Some(post) = self.catalog.post_at(index) else {
                break;
            };
            if date_labels.push(long_date_label(post.published)).is_err()
                || teasers.push(teaser(post.summary, TEASER_MAX_CHARS)).is_err()
            {
                break;
            }
        }

        let mut cards: Vec<CardView<'_>, MAX_CARDS> = Vec::new();
        for (slot, (date_label, teaser)) in date_labels.iter().zip(teasers.iter()).enumerate() {
            let index = slot as u16;
            let Some(post) = self.catalog.post_at(index) else {
                break;
            };
            let _ = cards.push(CardView {
                index,
                id: post.id,
                title: post.title,
                author: post.author,
                status_label: post.status.label(),
                featured: post.status == PostStatus::Featured,
                teaser: teaser.as_str(),
                date_label: date_label.as_str(),
            });
        }

        let carousel = self.carousel.as_ref().map(|carousel| {
            let visible = carousel.visible_range();
            CarouselView {
                cards: cards.as_slice(),
                visible_start: visible.start,
                visible_end: visible.end,
                track_offset_px: carousel.track_offset_px(),
                items_per_page: carousel.items_per_page(),
                current_page: carousel.current_page(),
                page_count: carousel.page_count(),
                prev: self
                    .surface
                    .prev_control
                    .then(|| ControlView::from_enabled(carousel.prev_enabled())),
                next: self
                    .surface
                    .next_control
                    .then(|| ControlView::from_enabled(carousel.next_enabled())),
                indicators: self.surface.indicators.then(|| IndicatorsView {
                    count: carousel.page_count(),
                    active: carousel.current_page(),
                }),
                auto_advance_paused: matches!(carousel.timer(), AutoAdvance::Paused),
            }
        });

        let open = self.reader.as_ref().and_then(ReaderModal::open_post);
        let post = open
            .and_then(|open| open.index())
            .and_then(|index| self.catalog.post_at(index));
        let modal_date = post.map(|post| long_date_label(post.published));

        let modal = open.map(|open| ModalView {
            post_id: open.id(),
            title: post.map(|post| post.title).unwrap_or(FALLBACK_TITLE),
            author: post.map(|post| post.author),
            date_label: modal_date.as_ref().map(|label| label.as_str()),
            body_html: self.catalog.body_of(open.id()).unwrap_or(FALLBACK_BODY),
            found: post.is_some(),
            scroll_offset: open.scroll_offset(),
            restart_visible: open.restart_visible(),
            focus: open.focus(),
        });

        f(Screen {
            carousel,
            modal,
            page_scroll_locked: self.page_scroll_locked(),
        })
    }
}
