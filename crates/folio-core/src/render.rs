//! Page view models consumed by the host renderer.

use crate::reader::ModalControl;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CardView<'a> {
    /// Catalog index, echoed back by the card's read trigger.
    pub index: u16,
    pub id: &'a str,
    pub title: &'a str,
    pub author: &'a str,
    pub status_label: &'a str,
    pub featured: bool,
    pub teaser: &'a str,
    pub date_label: &'a str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlView {
    Enabled,
    Disabled,
}

impl ControlView {
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Page dots under the track. `count` always equals the page count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndicatorsView {
    pub count: u16,
    pub active: u16,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CarouselView<'a> {
    /// Every card on the track, in catalog order.
    pub cards: &'a [CardView<'a>],
    pub visible_start: u16,
    pub visible_end: u16,
    /// Leftward translation of the track.
    pub track_offset_px: u32,
    pub items_per_page: u16,
    pub current_page: u16,
    pub page_count: u16,
    /// `None` when the host page has no such element.
    pub prev: Option<ControlView>,
    pub next: Option<ControlView>,
    pub indicators: Option<IndicatorsView>,
    pub auto_advance_paused: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModalView<'a> {
    pub post_id: &'a str,
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub date_label: Option<&'a str>,
    pub body_html: &'a str,
    /// `false` when the fallback view is shown.
    pub found: bool,
    pub scroll_offset: u32,
    pub restart_visible: bool,
    pub focus: ModalControl,
}

/// Everything the host needs to draw the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Screen<'a> {
    pub carousel: Option<CarouselView<'a>>,
    pub modal: Option<ModalView<'a>>,
    /// Background scrolling is disabled while the modal is open.
    pub page_scroll_locked: bool,
}
