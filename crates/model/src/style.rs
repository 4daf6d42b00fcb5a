//! Semantic style names and style spans.
//!
//! Content providers emit [`StyleSpan`] entries naming semantic styles; the
//! front end resolves each [`StyleName`] to concrete terminal colors. Column
//! ranges are display columns over the composed line, not byte offsets.

use serde::{Deserialize, Serialize};

/// Semantic styles a content provider may paint with.
///
/// Keeping this a closed enumeration means a misspelled style is a compile
/// error rather than a silently unstyled span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleName {
    /// Header gradient slot, cycled across header lines.
    HeaderGradient(u8),
    /// Section title line ("Recent files", "Sessions", ...).
    SectionTitle,
    /// Menu item icon glyph.
    Icon,
    /// Menu item description text.
    Description,
    /// Menu item key label.
    KeyLabel,
    /// List entry label (file name, session name).
    EntryLabel,
    /// List entry detail (directory, path).
    EntryDetail,
    /// Footer text.
    Footer,
    /// The currently selected row.
    Selected,
}

/// The number of distinct header gradient slots.
///
/// Providers cycle through slots `0..GRADIENT_SLOTS` when a header has more
/// lines than slots.
pub const GRADIENT_SLOTS: u8 = 6;

impl StyleName {
    /// Returns the gradient slot for a header line index, cycling.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_model::StyleName;
    ///
    /// assert_eq!(StyleName::gradient(0), StyleName::HeaderGradient(0));
    /// assert_eq!(StyleName::gradient(7), StyleName::HeaderGradient(1));
    /// ```
    #[must_use]
    pub fn gradient(line: usize) -> Self {
        Self::HeaderGradient((line % usize::from(GRADIENT_SLOTS)) as u8)
    }
}

/// A styled display-column range on one composed line.
///
/// `start` and `end` are display-column offsets into the composed line
/// (after padding and centering); `end` is exclusive. Entries whose range
/// exceeds the actual line are clipped at paint time; entries whose line
/// index is out of bounds are dropped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpan {
    /// The semantic style to apply.
    pub style: StyleName,
    /// Zero-based index into the composed buffer lines.
    pub line: usize,
    /// First display column (inclusive).
    pub start: u16,
    /// Last display column (exclusive).
    pub end: u16,
}

impl StyleSpan {
    /// Creates a style span.
    #[must_use]
    pub fn new(style: StyleName, line: usize, start: u16, end: u16) -> Self {
        Self {
            style,
            line,
            start,
            end,
        }
    }

    /// Returns `true` if the span covers no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_cycles_over_slots() {
        assert_eq!(StyleName::gradient(0), StyleName::HeaderGradient(0));
        assert_eq!(StyleName::gradient(5), StyleName::HeaderGradient(5));
        assert_eq!(StyleName::gradient(6), StyleName::HeaderGradient(0));
        assert_eq!(StyleName::gradient(13), StyleName::HeaderGradient(1));
    }

    #[test]
    fn empty_span_detection() {
        assert!(StyleSpan::new(StyleName::Footer, 0, 4, 4).is_empty());
        assert!(StyleSpan::new(StyleName::Footer, 0, 5, 4).is_empty());
        assert!(!StyleSpan::new(StyleName::Footer, 0, 4, 5).is_empty());
    }

    #[test]
    fn span_roundtrip() {
        let span = StyleSpan::new(StyleName::HeaderGradient(2), 3, 10, 20);
        let json = serde_json::to_string(&span).expect("serialize");
        let parsed: StyleSpan = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(span, parsed);
    }
}
