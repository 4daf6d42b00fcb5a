//! Frame rendering of the host model.
//!
//! The dashboard core mutates the [`MemoryHost`]; this module draws that
//! state into a Ratatui frame each tick: surfaces in paint order, buffer
//! lines at their surface offsets, style spans resolved through the palette,
//! and the most recent host notification on the bottom row.

use portico_model::StyleSpan;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::host::{Host, MemoryHost, Notice};
use crate::palette;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 30;

/// Minimum terminal height for useful rendering.
pub const MIN_HEIGHT: u16 = 8;

/// Renders the host model into the frame.
///
/// Implements graceful degradation for small terminal sizes: below the
/// minimum dimensions a "terminal too small" message is shown instead of
/// the dashboard.
pub fn render_host(host: &MemoryHost, frame: &mut Frame) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_terminal_too_small(frame, area);
        return;
    }

    let base = host.base_surface();
    for surface in host.paint_order() {
        let Some(dims) = host.surface_dims(surface) else {
            continue;
        };
        let Ok(buffer) = host.surface_buffer(surface) else {
            continue;
        };
        let Ok(lines) = host.lines(buffer) else {
            continue;
        };

        let rect = Rect::new(
            area.x.saturating_add(dims.col),
            area.y.saturating_add(dims.row),
            dims.width,
            dims.height,
        )
        .intersection(area);
        if rect.is_empty() {
            continue;
        }

        let buf = frame.buffer_mut();
        if surface != base {
            Clear.render(rect, buf);
        }

        for (row, line) in lines.iter().take(usize::from(rect.height)).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = rect.y + row as u16;
            buf.set_stringn(
                rect.x,
                y,
                line,
                usize::from(rect.width),
                Style::default(),
            );
        }

        for span in host.spans(buffer) {
            apply_span(buf, rect, span);
        }
    }

    render_notice(host, frame, area);
}

/// Applies one style span within a surface rectangle.
fn apply_span(buf: &mut ratatui::buffer::Buffer, rect: Rect, span: &StyleSpan) {
    let Ok(row) = u16::try_from(span.line) else {
        return;
    };
    if row >= rect.height || span.start >= rect.width {
        return;
    }
    let end = span.end.min(rect.width);
    if end <= span.start {
        return;
    }

    let style_area = Rect::new(rect.x + span.start, rect.y + row, end - span.start, 1);
    buf.set_style(style_area, palette::resolve(span.style));
}

/// Renders the most recent host notification on the bottom row.
fn render_notice(host: &MemoryHost, frame: &mut Frame, area: Rect) {
    let Some((level, message)) = host.last_notice() else {
        return;
    };

    let style = match level {
        Notice::Info => Style::default().fg(Color::DarkGray),
        Notice::Warning => Style::default().fg(Color::Yellow),
        Notice::Error => Style::default().fg(Color::Red),
    };

    let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let paragraph = Paragraph::new(Line::styled(message.as_str(), style));
    frame.render_widget(paragraph, row);
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    frame.render_widget(paragraph, centered_area);
}
