//! Page-level composition of the blog carousel and the reader modal.

use heapless::Vec;
use log::{debug, info, warn};

use crate::{
    carousel::{AutoAdvance, CarouselConfig, CarouselController},
    catalog::{FALLBACK_BODY, FALLBACK_TITLE, PostCatalog, PostStatus},
    input::{InputEvent, InputProvider},
    notify::Notifier,
    reader::{ReaderConfig, ReaderModal},
    render::{CardView, CarouselView, ControlView, IndicatorsView, ModalView, Screen},
    store::{PositionBackend, PositionStore},
    text_policy::{DateLabel, TEASER_MAX_CHARS, Teaser, long_date_label, teaser},
};

/// Cards the view model can carry. Longer catalogs are cut with a warning.
pub const MAX_CARDS: usize = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Host elements present on the current page.
///
/// A missing element means the matching feature is not mounted on this page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageSurface {
    pub carousel_track: bool,
    pub prev_control: bool,
    pub next_control: bool,
    pub indicators: bool,
    pub modal_root: bool,
    pub modal_content: bool,
}

impl PageSurface {
    /// Home page: every element present.
    pub const fn home() -> Self {
        Self {
            carousel_track: true,
            prev_control: true,
            next_control: true,
            indicators: true,
            modal_root: true,
            modal_content: true,
        }
    }

    /// Page without any blog elements.
    pub const fn bare() -> Self {
        Self {
            carousel_track: false,
            prev_control: false,
            next_control: false,
            indicators: false,
            modal_root: false,
            modal_content: false,
        }
    }

    pub const fn with_controls(mut self, prev: bool, next: bool) -> Self {
        self.prev_control = prev;
        self.next_control = next;
        self
    }

    pub const fn with_indicators(mut self, indicators: bool) -> Self {
        self.indicators = indicators;
        self
    }

    pub const fn with_modal(mut self, root: bool, content: bool) -> Self {
        self.modal_root = root;
        self.modal_content = content;
        self
    }

    pub const fn with_carousel_track(mut self, track: bool) -> Self {
        self.carousel_track = track;
        self
    }

    pub const fn carousel_mounted(&self) -> bool {
        self.carousel_track
    }

    pub const fn reader_mounted(&self) -> bool {
        self.modal_root && self.modal_content
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub reader: ReaderConfig,
}

pub struct SiteApp<C, B, N, IN>
where
    C: PostCatalog,
    B: PositionBackend,
    N: Notifier,
    IN: InputProvider,
{
    catalog: C,
    positions: PositionStore<B>,
    notifier: N,
    input: IN,
    surface: PageSurface,
    carousel: Option<CarouselController>,
    reader: Option<ReaderModal>,
    mounted: bool,
    pending_redraw: bool,
}

include!("runtime.rs");
include!("input.rs");
include!("view.rs");

#[cfg(test)]
mod tests;
