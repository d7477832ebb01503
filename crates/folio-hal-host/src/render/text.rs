use folio_core::{
    reader::ModalControl,
    render::{CarouselView, ControlView, ModalView, Screen},
};

use super::{FrameRenderer, TextFrame};

const DEFAULT_COLUMNS: usize = 78;
const DEFAULT_BODY_PREVIEW_CHARS: usize = 480;
const MIN_COLUMNS: usize = 24;

/// Plain-text renderer for terminals and logs.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    columns: usize,
    body_preview_chars: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            body_preview_chars: DEFAULT_BODY_PREVIEW_CHARS,
        }
    }
}

impl TextRenderer {
    pub fn new(columns: usize) -> Self {
        Self::default().with_columns(columns)
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(MIN_COLUMNS);
        self
    }

    pub fn with_body_preview_chars(mut self, body_preview_chars: usize) -> Self {
        self.body_preview_chars = body_preview_chars;
        self
    }

    fn render_carousel(&self, carousel: &CarouselView<'_>, frame: &mut TextFrame) {
        frame.push_line(self.rule(&format!(
            " Latest posts {}/{} ",
            carousel.current_page + 1,
            carousel.page_count
        )));

        let controls = format!(
            "{}  {}{}",
            control_label("<", carousel.prev),
            control_label(">", carousel.next),
            if carousel.auto_advance_paused {
                "  (paused)"
            } else {
                ""
            }
        );
        frame.push_line(controls.trim_end().to_owned());

        let visible = carousel.visible_start as usize..carousel.visible_end as usize;
        for card in carousel.cards.get(visible).unwrap_or(&[]) {
            frame.push_line(self.fit(&format!(
                "[{}] {} | {}",
                card.index, card.status_label, card.date_label
            )));
            frame.push_line(self.fit(&format!("    {}", card.title)));
            frame.push_line(self.fit(&format!("    by {}", card.author)));
            for line in wrap(card.teaser, self.columns.saturating_sub(4)) {
                frame.push_line(format!("    {}", line));
            }
        }

        if let Some(indicators) = carousel.indicators {
            let dots: Vec<&str> = (0..indicators.count)
                .map(|page| if page == indicators.active { "(*)" } else { "( )" })
                .collect();
            frame.push_line(dots.join(" "));
        }
    }

    fn render_modal(&self, modal: &ModalView<'_>, frame: &mut TextFrame) {
        frame.push_line(self.rule(" Reader "));
        frame.push_line(self.fit(modal.title));

        match (modal.author, modal.date_label) {
            (Some(author), Some(date)) => {
                frame.push_line(self.fit(&format!("by {} | {}", author, date)))
            }
            (Some(author), None) => frame.push_line(self.fit(&format!("by {}", author))),
            (None, Some(date)) => frame.push_line(self.fit(date)),
            (None, None) => {}
        }

        let mut controls = focus_label("Close", modal.focus == ModalControl::Close);
        if modal.restart_visible {
            controls.push(' ');
            controls.push_str(&focus_label(
                "Start from beginning",
                modal.focus == ModalControl::Restart,
            ));
        }
        frame.push_line(format!("{}  scroll={}", controls, modal.scroll_offset));

        let body = strip_tags(modal.body_html);
        let preview: String = body.chars().take(self.body_preview_chars).collect();
        for line in wrap(&preview, self.columns) {
            frame.push_line(line);
        }
        if preview.len() < body.len() {
            frame.push_line("...");
        }
    }

    fn rule(&self, label: &str) -> String {
        let used = label.chars().count() + 2;
        format!("=={}{}", label, "=".repeat(self.columns.saturating_sub(used)))
    }

    fn fit(&self, text: &str) -> String {
        if text.chars().count() <= self.columns {
            return text.to_owned();
        }
        let mut out: String = text.chars().take(self.columns.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}

impl FrameRenderer for TextRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut TextFrame) {
        frame.clear();

        if let Some(carousel) = screen.carousel.as_ref() {
            self.render_carousel(carousel, frame);
        }
        if let Some(modal) = screen.modal.as_ref() {
            self.render_modal(modal, frame);
        }
        if screen.page_scroll_locked {
            frame.push_line("(page scroll locked)");
        }
        if frame.lines().is_empty() {
            frame.push_line("(no blog elements on this page)");
        }
    }
}

fn control_label(arrow: &str, control: Option<ControlView>) -> String {
    match control {
        Some(ControlView::Enabled) => format!("[{}]", arrow),
        Some(ControlView::Disabled) => format!("({})", arrow),
        None => String::new(),
    }
}

fn focus_label(label: &str, focused: bool) -> String {
    if focused {
        format!(">[{}]<", label)
    } else {
        format!("[{}]", label)
    }
}

/// Drop markup and collapse whitespace. Every tag becomes a word break.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn wrap(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars > 0 && current_chars + 1 + word_chars > columns {
            lines.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current_chars > 0 {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(word);
        current_chars += word_chars;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
