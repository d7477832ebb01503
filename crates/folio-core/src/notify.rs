//! User notification sink.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Fire-and-forget toast sink provided by the host page.
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: NotificationKind);
}

/// Sink that drops every notification.
#[derive(Default, Debug, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&mut self, _message: &str, _kind: NotificationKind) {}
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind);
    }
}
