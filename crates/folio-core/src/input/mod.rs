//! Input abstraction layer.

mod queue;

pub use queue::{EventQueue, QueueFull};

/// Keys the page reacts to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Escape,
    Tab,
    ShiftTab,
    Enter,
}

/// Where a click inside the modal root landed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalClick {
    /// The dimmed area around the article.
    Backdrop,
    Content,
    CloseButton,
    RestartButton,
}

/// Logical page events consumed by the site app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Resize { width: u32 },
    PrevClicked,
    NextClicked,
    IndicatorClicked { page: u16 },
    PointerEnter,
    PointerLeave,
    /// Read trigger on the card at this catalog index.
    ReadClicked { index: u16 },
    ModalScroll { offset: u32 },
    ModalClick(ModalClick),
    KeyDown(Key),
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
