//! Shared text shaping for carousel cards and the reader header.

use core::fmt::Write;

use heapless::String;

use crate::catalog::PublishedDate;

pub const DATE_LABEL_BYTES: usize = 24;
pub const TEASER_BYTES: usize = 320;
pub const TEASER_MAX_CHARS: usize = 220;

pub type DateLabel = String<DATE_LABEL_BYTES>;
pub type Teaser = String<TEASER_BYTES>;

/// Long US form, e.g. `February 15, 2024`. Unknown months fall back to ISO form.
pub fn long_date_label(date: PublishedDate) -> DateLabel {
    let mut out = DateLabel::new();
    let written = match date.month_name() {
        Some(month) => write!(out, "{} {}, {}", month, date.day, date.year),
        None => write!(out, "{:04}-{:02}-{:02}", date.year, date.month, date.day),
    };
    if written.is_err() {
        out.clear();
    }
    out
}

/// Card teaser cut at a word boundary after at most `max_chars` characters.
pub fn teaser(source: &str, max_chars: usize) -> Teaser {
    let mut out = Teaser::new();
    let mut chars = 0usize;
    let mut truncated = false;

    for (index, word) in source.split_whitespace().enumerate() {
        let word_chars = word.chars().count();
        let separator = usize::from(index > 0);
        if chars + separator + word_chars > max_chars
            || out.len() + separator + word.len() + 3 > out.capacity()
        {
            truncated = true;
            break;
        }

        if separator == 1 {
            let _ = out.push(' ');
        }
        let _ = out.push_str(word);
        chars += separator + word_chars;
    }

    if truncated && !out.is_empty() {
        let _ = out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_dates() {
        assert_eq!(
            long_date_label(PublishedDate::new(2024, 2, 15)).as_str(),
            "February 15, 2024"
        );
        assert_eq!(
            long_date_label(PublishedDate::new(2024, 7, 1)).as_str(),
            "July 1, 2024"
        );
    }

    #[test]
    fn invalid_month_uses_numeric_form() {
        assert_eq!(
            long_date_label(PublishedDate::new(2024, 0, 9)).as_str(),
            "2024-00-09"
        );
    }

    #[test]
    fn short_teaser_is_untouched() {
        assert_eq!(teaser("  hello   world ", 40).as_str(), "hello world");
    }

    #[test]
    fn long_teaser_is_cut_at_word_boundary() {
        let cut = teaser("alpha beta gamma delta", 12);
        assert_eq!(cut.as_str(), "alpha beta...");
    }

    #[test]
    fn multibyte_text_counts_chars() {
        let cut = teaser("árbol café niño", 10);
        assert_eq!(cut.as_str(), "árbol café...");
    }
}
