pub mod text;

use std::fmt;

use folio_core::render::Screen;

pub trait FrameRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut TextFrame);
}

/// Line-oriented frame buffer for terminal output.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TextFrame {
    lines: Vec<String>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl fmt::Display for TextFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
