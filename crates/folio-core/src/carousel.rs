//! Paging state machine for the home-page blog carousel.

use core::ops::Range;

use log::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CarouselConfig {
    /// Card width plus the gap between cards.
    pub card_stride_px: u32,
    pub max_container_px: u32,
    /// Horizontal space reserved for the prev/next controls.
    pub control_padding_px: u32,
    pub tablet_min_width: u32,
    pub desktop_min_width: u32,
    pub tablet_max_items: u16,
    pub desktop_max_items: u16,
    pub auto_advance_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_stride_px: 352,
            max_container_px: 1_200,
            control_padding_px: 160,
            tablet_min_width: 768,
            desktop_min_width: 1_024,
            tablet_max_items: 2,
            desktop_max_items: 3,
            auto_advance_ms: 5_000,
        }
    }
}

impl CarouselConfig {
    pub const fn with_auto_advance_ms(mut self, auto_advance_ms: u64) -> Self {
        self.auto_advance_ms = auto_advance_ms;
        self
    }

    pub const fn with_card_stride_px(mut self, card_stride_px: u32) -> Self {
        self.card_stride_px = card_stride_px;
        self
    }

    /// Cards per page for a viewport width. Always at least one.
    pub fn items_per_page(&self, viewport_width: u32) -> u16 {
        if viewport_width < self.tablet_min_width {
            return 1;
        }

        let container = self
            .max_container_px
            .min(viewport_width.saturating_sub(self.control_padding_px));
        let capacity = container / self.card_stride_px.max(1);
        let tier_max = if viewport_width < self.desktop_min_width {
            self.tablet_max_items
        } else {
            self.desktop_max_items
        };

        capacity.clamp(1, tier_max.max(1) as u32) as u16
    }
}

/// Number of pages for `item_count` cards, never zero.
pub fn page_count(item_count: u16, items_per_page: u16) -> u16 {
    item_count.div_ceil(items_per_page.max(1)).max(1)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AutoAdvance {
    /// Host view not mounted; no timer exists.
    Unmounted,
    /// Pointer is over the carousel.
    Paused,
    Scheduled { due_ms: u64 },
}

#[derive(Clone, Debug)]
pub struct CarouselController {
    config: CarouselConfig,
    item_count: u16,
    items_per_page: u16,
    current_page: u16,
    hovered: bool,
    timer: AutoAdvance,
}

impl CarouselController {
    pub fn new(config: CarouselConfig, item_count: u16, viewport_width: u32) -> Self {
        Self {
            config,
            item_count,
            items_per_page: config.items_per_page(viewport_width),
            current_page: 0,
            hovered: false,
            timer: AutoAdvance::Unmounted,
        }
    }

    pub fn mount(&mut self, now_ms: u64) {
        self.timer = if self.hovered {
            AutoAdvance::Paused
        } else {
            self.schedule_from(now_ms)
        };
        debug!(
            "carousel: mounted items={} per_page={} pages={}",
            self.item_count,
            self.items_per_page,
            self.page_count()
        );
    }

    /// Drop the auto-advance timer. Later ticks are ignored until remounted.
    pub fn unmount(&mut self) {
        self.timer = AutoAdvance::Unmounted;
        self.hovered = false;
        debug!("carousel: unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self.timer, AutoAdvance::Unmounted)
    }

    /// Recompute items per page and keep the current page in range.
    pub fn resize(&mut self, viewport_width: u32) -> bool {
        let items_per_page = self.config.items_per_page(viewport_width);
        if items_per_page == self.items_per_page {
            return false;
        }

        let previous_page = self.current_page;
        self.items_per_page = items_per_page;
        self.current_page = self.current_page.min(self.last_page());
        debug!(
            "carousel: resize width={} per_page={} pages={} page {} -> {}",
            viewport_width,
            items_per_page,
            self.page_count(),
            previous_page,
            self.current_page
        );
        true
    }

    /// Manual forward navigation. Stops at the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page >= self.last_page() {
            return false;
        }
        self.move_to(self.current_page + 1, "next");
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.current_page == 0 {
            return false;
        }
        self.move_to(self.current_page - 1, "previous");
        true
    }

    /// Jump to `page`; out-of-range pages are ignored.
    pub fn go_to(&mut self, page: u16) -> bool {
        if page >= self.page_count() || page == self.current_page {
            return false;
        }
        self.move_to(page, "indicator");
        true
    }

    /// Auto-advance step: forward, wrapping from the last page back to the first.
    pub fn auto_advance(&mut self) -> bool {
        let target = if self.current_page < self.last_page() {
            self.current_page + 1
        } else {
            0
        };
        if target == self.current_page {
            return false;
        }
        self.move_to(target, "auto");
        true
    }

    /// Fire the auto-advance timer when due.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let AutoAdvance::Scheduled { due_ms } = self.timer else {
            return false;
        };
        if now_ms < due_ms {
            return false;
        }

        let next_due = due_ms.saturating_add(self.config.auto_advance_ms);
        self.timer = if next_due > now_ms {
            AutoAdvance::Scheduled { due_ms: next_due }
        } else {
            self.schedule_from(now_ms)
        };
        self.auto_advance()
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.is_mounted() {
            self.timer = AutoAdvance::Paused;
        }
    }

    /// Resume auto-advance with a full interval.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        self.hovered = false;
        if self.is_mounted() {
            self.timer = self.schedule_from(now_ms);
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn timer(&self) -> AutoAdvance {
        self.timer
    }

    pub fn item_count(&self) -> u16 {
        self.item_count
    }

    pub fn items_per_page(&self) -> u16 {
        self.items_per_page
    }

    pub fn current_page(&self) -> u16 {
        self.current_page
    }

    pub fn page_count(&self) -> u16 {
        page_count(self.item_count, self.items_per_page)
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_page > 0
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page < self.last_page()
    }

    /// Horizontal track translation for the current page.
    pub fn track_offset_px(&self) -> u32 {
        (self.current_page as u32)
            .saturating_mul(self.items_per_page as u32)
            .saturating_mul(self.config.card_stride_px)
    }

    /// Catalog indices of the cards on the current page.
    pub fn visible_range(&self) -> Range<u16> {
        let start = self
            .current_page
            .saturating_mul(self.items_per_page)
            .min(self.item_count);
        let end = start.saturating_add(self.items_per_page).min(self.item_count);
        start..end
    }

    fn last_page(&self) -> u16 {
        self.page_count() - 1
    }

    fn move_to(&mut self, page: u16, reason: &str) {
        debug!(
            "carousel: page {} -> {} reason={} offset_px={}",
            self.current_page,
            page,
            reason,
            (page as u32)
                .saturating_mul(self.items_per_page as u32)
                .saturating_mul(self.config.card_stride_px)
        );
        self.current_page = page;
    }

    fn schedule_from(&self, now_ms: u64) -> AutoAdvance {
        AutoAdvance::Scheduled {
            due_ms: now_ms.saturating_add(self.config.auto_advance_ms.max(1)),
        }
    }
}
