//! Highlight application.
//!
//! [`paint`] owns the dashboard's style namespace on a buffer: it clears
//! everything it previously applied, then applies the new spans. Spans are
//! clipped to the actual line, never rejected for being too long; spans
//! naming a line the buffer does not have are dropped silently. Painting
//! touches styling only, never buffer text.

use portico_model::StyleSpan;
use unicode_width::UnicodeWidthStr;

use crate::host::{BufferId, Host};

/// Repaints a buffer's style spans.
///
/// Clearing first prevents spans accumulating across repeated redraws.
///
/// # Examples
///
/// ```
/// use portico_model::{StyleName, StyleSpan, Viewport};
/// use portico_tui::highlight::paint;
/// use portico_tui::host::{Host, MemoryHost};
///
/// let mut host = MemoryHost::new(Viewport::new(80, 24));
/// let buffer = host.create_buffer().unwrap();
/// host.set_lines(buffer, vec!["0123456789".to_string()]).unwrap();
///
/// // col_end beyond the line is clipped to the line width, not dropped
/// paint(&mut host, buffer, &[StyleSpan::new(StyleName::Footer, 0, 2, 50)]);
/// assert_eq!(host.spans(buffer)[0].end, 10);
/// ```
pub fn paint(host: &mut dyn Host, buffer: BufferId, spans: &[StyleSpan]) {
    host.clear_spans(buffer);

    let line_widths: Vec<u16> = match host.lines(buffer) {
        Ok(lines) => lines
            .iter()
            .map(|l| u16::try_from(UnicodeWidthStr::width(l.as_str())).unwrap_or(u16::MAX))
            .collect(),
        Err(_) => return,
    };

    for span in spans {
        let Some(&line_width) = line_widths.get(span.line) else {
            continue;
        };
        let end = span.end.min(line_width);
        if end <= span.start {
            continue;
        }
        let mut clipped = *span;
        clipped.end = end;
        host.add_span(buffer, clipped);
    }
}
