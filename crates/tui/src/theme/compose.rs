//! Content-block composition.
//!
//! Turns a [`ContentBlock`] into the exact lines written to the buffer:
//! header at the top, footer at the bottom, center block vertically centered
//! in between, every line horizontally centered by display width. The
//! composed result records where each source line landed so highlight spans
//! can be computed against the real output.

use portico_model::{ContentBlock, Dimensions};
use unicode_width::UnicodeWidthStr;

/// Which region of the content block a composed line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Header region.
    Header,
    /// Center region.
    Center,
    /// Footer region.
    Footer,
}

/// Source coordinates of one composed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOrigin {
    /// The region the line came from.
    pub region: Region,
    /// Index within that region's lines.
    pub index: usize,
}

/// The composed output of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    /// Exactly `dims.height` lines, leading-space padded for centering.
    pub lines: Vec<String>,
    /// Per-line source coordinates; `None` for spacer lines.
    pub origins: Vec<Option<LineOrigin>>,
    /// Per-line display-column offset applied by horizontal centering.
    pub offsets: Vec<u16>,
}

impl Composed {
    /// Finds the composed line index a source line landed on.
    #[must_use]
    pub fn position_of(&self, region: Region, index: usize) -> Option<usize> {
        let wanted = LineOrigin { region, index };
        self.origins.iter().position(|o| *o == Some(wanted))
    }

    /// The display width of a composed line, padding included.
    #[must_use]
    pub fn line_width(&self, line: usize) -> u16 {
        self.lines
            .get(line)
            .map_or(0, |l| clamp_u16(UnicodeWidthStr::width(l.as_str())))
    }
}

/// Composes a content block into `dims.height` lines of at most
/// `dims.width` display columns.
///
/// Overflowing regions are truncated rather than wrapped: the header keeps
/// its first lines, the footer is dropped entirely if it no longer fits
/// under the header, and the center block keeps what fits in between.
#[must_use]
pub fn compose(block: &ContentBlock, dims: Dimensions) -> Composed {
    let height = usize::from(dims.height);
    let width = usize::from(dims.width);

    let header_len = block.header.len().min(height);
    let footer_len = if header_len + block.footer.len() <= height {
        block.footer.len()
    } else {
        0
    };
    let middle_space = height - header_len - footer_len;
    let center_len = block.center.len().min(middle_space);
    let top_gap = (middle_space - center_len) / 2;

    let mut lines = Vec::with_capacity(height);
    let mut origins = Vec::with_capacity(height);
    let mut offsets = Vec::with_capacity(height);

    let mut push = |text: Option<(&str, LineOrigin)>| {
        match text {
            Some((raw, origin)) => {
                let (truncated, line_width) = truncate_display(raw, width);
                let offset = (width - line_width) / 2;
                let mut line = " ".repeat(offset);
                line.push_str(truncated);
                lines.push(line);
                origins.push(Some(origin));
                offsets.push(clamp_u16(offset));
            }
            None => {
                lines.push(String::new());
                origins.push(None);
                offsets.push(0);
            }
        }
    };

    for (index, line) in block.header.iter().take(header_len).enumerate() {
        push(Some((
            line,
            LineOrigin {
                region: Region::Header,
                index,
            },
        )));
    }
    for _ in 0..top_gap {
        push(None);
    }
    for (index, line) in block.center.iter().take(center_len).enumerate() {
        push(Some((
            line,
            LineOrigin {
                region: Region::Center,
                index,
            },
        )));
    }
    for _ in 0..(middle_space - center_len - top_gap) {
        push(None);
    }
    for (index, line) in block.footer.iter().take(footer_len).enumerate() {
        push(Some((
            line,
            LineOrigin {
                region: Region::Footer,
                index,
            },
        )));
    }

    Composed {
        lines,
        origins,
        offsets,
    }
}

/// Truncates a string to at most `max` display columns.
///
/// Returns the truncated slice and its display width. A wide glyph that
/// would straddle the boundary is dropped entirely.
#[must_use]
pub fn truncate_display(s: &str, max: usize) -> (&str, usize) {
    let mut width = 0;
    for (byte_index, ch) in s.char_indices() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max {
            return (&s[..byte_index], width);
        }
        width += ch_width;
    }
    (s, width)
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(header: &[&str], center: &[&str], footer: &[&str]) -> ContentBlock {
        ContentBlock {
            header: header.iter().map(|s| (*s).to_string()).collect(),
            center: center.iter().map(|s| (*s).to_string()).collect(),
            footer: footer.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn compose_produces_exact_height() {
        let composed = compose(
            &block(&["art"], &["menu"], &["foot"]),
            Dimensions::new(20, 10, 0, 0),
        );
        assert_eq!(composed.lines.len(), 10);
        assert_eq!(composed.origins.len(), 10);
        assert_eq!(composed.offsets.len(), 10);
    }

    #[test]
    fn header_top_footer_bottom_center_middle() {
        let composed = compose(
            &block(&["H"], &["C"], &["F"]),
            Dimensions::new(11, 7, 0, 0),
        );

        assert_eq!(composed.position_of(Region::Header, 0), Some(0));
        assert_eq!(composed.position_of(Region::Footer, 0), Some(6));
        // Middle space is rows 1..=5; the single center row sits at its middle
        let center_row = composed.position_of(Region::Center, 0).unwrap();
        assert!((2..=4).contains(&center_row));
    }

    #[test]
    fn lines_are_horizontally_centered() {
        let composed = compose(&block(&[], &["abc"], &[]), Dimensions::new(11, 3, 0, 0));
        let row = composed.position_of(Region::Center, 0).unwrap();
        // (11 - 3) / 2 = 4 leading spaces
        assert_eq!(composed.lines[row], "    abc");
        assert_eq!(composed.offsets[row], 4);
    }

    #[test]
    fn wide_line_is_truncated_to_width() {
        let composed = compose(
            &block(&[], &["abcdefghij"], &[]),
            Dimensions::new(4, 1, 0, 0),
        );
        assert_eq!(composed.lines[0], "abcd");
        assert_eq!(composed.offsets[0], 0);
    }

    #[test]
    fn footer_dropped_when_it_no_longer_fits() {
        let composed = compose(
            &block(&["1", "2", "3"], &[], &["f"]),
            Dimensions::new(5, 3, 0, 0),
        );
        assert_eq!(composed.position_of(Region::Footer, 0), None);
        assert_eq!(composed.position_of(Region::Header, 2), Some(2));
    }

    #[test]
    fn center_truncated_to_middle_space() {
        let composed = compose(
            &block(&["h"], &["1", "2", "3", "4", "5"], &["f"]),
            Dimensions::new(5, 4, 0, 0),
        );
        // Middle space is 2 rows; only the first two center lines survive
        assert!(composed.position_of(Region::Center, 1).is_some());
        assert_eq!(composed.position_of(Region::Center, 2), None);
    }

    #[test]
    fn truncate_display_respects_wide_glyphs() {
        // '界' is two columns wide; it must not straddle the boundary
        let (s, w) = truncate_display("a界b", 2);
        assert_eq!(s, "a");
        assert_eq!(w, 1);

        let (s, w) = truncate_display("a界b", 3);
        assert_eq!(s, "a界");
        assert_eq!(w, 3);
    }

    #[test]
    fn compose_is_deterministic() {
        let b = block(&["x"], &["y", "z"], &["f"]);
        let dims = Dimensions::new(30, 12, 0, 0);
        assert_eq!(compose(&b, dims), compose(&b, dims));
    }
}
