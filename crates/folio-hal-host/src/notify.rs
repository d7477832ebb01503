use std::io::{self, Write};

use folio_core::notify::{NotificationKind, Notifier};
use log::{info, warn};

/// Prints toasts as `[kind] message` lines and mirrors them to the log.
#[derive(Debug)]
pub struct ConsoleNotifier<W: Write> {
    out: W,
    shown: usize,
}

impl ConsoleNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out, shown: 0 }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        info!("toast: kind={} message={}", kind.as_str(), message);
        let written = writeln!(self.out, "[{}] {}", kind.as_str(), message)
            .and_then(|()| self.out.flush());
        if let Err(err) = written {
            warn!("toast: console write failed err={}", err);
            return;
        }
        self.shown += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_toast() {
        let mut notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify("Resumed from where you left off", NotificationKind::Info);
        notifier.notify("Saved", NotificationKind::Success);

        assert_eq!(notifier.shown(), 2);
        let text = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            text,
            format!(
                "[{}] Resumed from where you left off\n[{}] Saved\n",
                NotificationKind::Info.as_str(),
                NotificationKind::Success.as_str()
            )
        );
    }
}
