use heapless::Deque;
use log::warn;

use super::{InputEvent, InputProvider};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QueueFull(pub InputEvent);

/// Bounded FIFO filled by host event callbacks and drained by the app tick.
#[derive(Debug)]
pub struct EventQueue<const N: usize> {
    events: Deque<InputEvent, N>,
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventQueue<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) -> Result<(), QueueFull> {
        self.events.push_back(event).map_err(|event| {
            warn!("input: queue full; dropping {:?}", event);
            QueueFull(event)
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<const N: usize> InputProvider for EventQueue<N> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_fifo_order() {
        let mut queue = EventQueue::<4>::new();
        queue.push(InputEvent::NextClicked).unwrap();
        queue.push(InputEvent::PrevClicked).unwrap();

        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::NextClicked)));
        assert_eq!(queue.poll_event(), Ok(Some(InputEvent::PrevClicked)));
        assert_eq!(queue.poll_event(), Ok(None));
    }

    #[test]
    fn rejects_events_when_full() {
        let mut queue = EventQueue::<1>::new();
        queue.push(InputEvent::PointerEnter).unwrap();
        assert_eq!(
            queue.push(InputEvent::PointerLeave),
            Err(QueueFull(InputEvent::PointerLeave))
        );
        assert_eq!(queue.len(), 1);
    }
}
