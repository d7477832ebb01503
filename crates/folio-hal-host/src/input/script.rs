use std::{collections::VecDeque, convert::Infallible, fmt};

use folio_core::input::{InputEvent, InputProvider, Key, ModalClick};
use log::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScriptedEvent {
    pub at_ms: u64,
    pub event: InputEvent,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptErrorKind {
    BadTime,
    /// Timestamps must not go backwards.
    OutOfOrder,
    UnknownCommand,
    MissingArgument,
    BadArgument,
    TrailingInput,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ScriptErrorKind,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            ScriptErrorKind::BadTime => "timestamp is not a number",
            ScriptErrorKind::OutOfOrder => "timestamp goes backwards",
            ScriptErrorKind::UnknownCommand => "unknown command",
            ScriptErrorKind::MissingArgument => "missing argument",
            ScriptErrorKind::BadArgument => "invalid argument",
            ScriptErrorKind::TrailingInput => "unexpected extra input",
        };
        write!(f, "script line {}: {}", self.line, reason)
    }
}

impl std::error::Error for ScriptError {}

/// Replays a timed event script.
///
/// One event per line: `<at_ms> <command> [arg]`. Blank lines and lines
/// starting with `#` are ignored. Commands:
///
/// | command     | argument                                  |
/// |-------------|-------------------------------------------|
/// | `resize`    | viewport width                            |
/// | `prev`      |                                           |
/// | `next`      |                                           |
/// | `indicator` | page index                                |
/// | `hover`     |                                           |
/// | `leave`     |                                           |
/// | `read`      | card index                                |
/// | `scroll`    | modal offset                              |
/// | `click`     | `backdrop`, `content`, `close`, `restart` |
/// | `key`       | `escape`, `tab`, `shift-tab`, `enter`     |
///
/// Events are released once [`ScriptedInput::advance_to`] has moved the
/// script clock to or past their timestamp.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<ScriptedEvent>,
    now_ms: u64,
}

impl ScriptedInput {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut events = VecDeque::new();
        let mut last_at_ms = 0u64;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let event = parse_line(content).map_err(|kind| ScriptError { line, kind })?;
            if event.at_ms < last_at_ms {
                return Err(ScriptError {
                    line,
                    kind: ScriptErrorKind::OutOfOrder,
                });
            }
            last_at_ms = event.at_ms;
            events.push_back(event);
        }

        debug!("script: parsed events={}", events.len());
        Ok(Self { events, now_ms: 0 })
    }

    pub fn from_events(events: impl IntoIterator<Item = ScriptedEvent>) -> Self {
        let mut events: Vec<_> = events.into_iter().collect();
        events.sort_by_key(|event| event.at_ms);
        Self {
            events: events.into(),
            now_ms: 0,
        }
    }

    /// Move the script clock. The clock never runs backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn next_at_ms(&self) -> Option<u64> {
        self.events.front().map(|event| event.at_ms)
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputProvider for ScriptedInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.events.front() {
            Some(next) if next.at_ms <= self.now_ms => {
                Ok(self.events.pop_front().map(|scripted| scripted.event))
            }
            _ => Ok(None),
        }
    }
}

fn parse_line(content: &str) -> Result<ScriptedEvent, ScriptErrorKind> {
    let mut parts = content.split_whitespace();
    let at_ms = parts
        .next()
        .and_then(|token| token.parse::<u64>().ok())
        .ok_or(ScriptErrorKind::BadTime)?;
    let command = parts.next().ok_or(ScriptErrorKind::UnknownCommand)?;
    let argument = parts.next();
    if parts.next().is_some() {
        return Err(ScriptErrorKind::TrailingInput);
    }

    let event = match command {
        "resize" => InputEvent::Resize {
            width: number_arg(argument)?,
        },
        "prev" => no_arg(argument, InputEvent::PrevClicked)?,
        "next" => no_arg(argument, InputEvent::NextClicked)?,
        "indicator" => InputEvent::IndicatorClicked {
            page: number_arg(argument)?,
        },
        "hover" => no_arg(argument, InputEvent::PointerEnter)?,
        "leave" => no_arg(argument, InputEvent::PointerLeave)?,
        "read" => InputEvent::ReadClicked {
            index: number_arg(argument)?,
        },
        "scroll" => InputEvent::ModalScroll {
            offset: number_arg(argument)?,
        },
        "click" => InputEvent::ModalClick(match argument {
            Some("backdrop") => ModalClick::Backdrop,
            Some("content") => ModalClick::Content,
            Some("close") => ModalClick::CloseButton,
            Some("restart") => ModalClick::RestartButton,
            Some(_) => return Err(ScriptErrorKind::BadArgument),
            None => return Err(ScriptErrorKind::MissingArgument),
        }),
        "key" => InputEvent::KeyDown(match argument {
            Some("escape") => Key::Escape,
            Some("tab") => Key::Tab,
            Some("shift-tab") => Key::ShiftTab,
            Some("enter") => Key::Enter,
            Some(_) => return Err(ScriptErrorKind::BadArgument),
            None => return Err(ScriptErrorKind::MissingArgument),
        }),
        _ => return Err(ScriptErrorKind::UnknownCommand),
    };

    Ok(ScriptedEvent { at_ms, event })
}

fn number_arg<T: std::str::FromStr>(argument: Option<&str>) -> Result<T, ScriptErrorKind> {
    argument
        .ok_or(ScriptErrorKind::MissingArgument)?
        .parse()
        .map_err(|_| ScriptErrorKind::BadArgument)
}

fn no_arg(argument: Option<&str>, event: InputEvent) -> Result<InputEvent, ScriptErrorKind> {
    match argument {
        Some(_) => Err(ScriptErrorKind::TrailingInput),
        None => Ok(event),
    }
}
