//! Style resolution.
//!
//! Semantic [`StyleName`]s become concrete Ratatui styles here, at the front
//! end boundary. The dashboard core never sees a color.

use portico_model::{GRADIENT_SLOTS, StyleName};
use ratatui::style::{Color, Modifier, Style};

/// The header gradient color sequence, one per slot.
const GRADIENT: [Color; GRADIENT_SLOTS as usize] = [
    Color::Magenta,
    Color::LightMagenta,
    Color::Blue,
    Color::LightBlue,
    Color::Cyan,
    Color::LightCyan,
];

/// Resolves a semantic style to a concrete terminal style.
///
/// # Examples
///
/// ```
/// use portico_model::StyleName;
/// use portico_tui::palette::resolve;
/// use ratatui::style::Color;
///
/// assert_eq!(resolve(StyleName::KeyLabel).fg, Some(Color::Green));
/// ```
#[must_use]
pub fn resolve(name: StyleName) -> Style {
    match name {
        StyleName::HeaderGradient(slot) => {
            let index = usize::from(slot) % GRADIENT.len();
            Style::default().fg(GRADIENT[index])
        }
        StyleName::SectionTitle => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        StyleName::Icon => Style::default().fg(Color::Cyan),
        StyleName::Description => Style::default().fg(Color::White),
        StyleName::KeyLabel => Style::default().fg(Color::Green),
        StyleName::EntryLabel => Style::default().fg(Color::White),
        StyleName::EntryDetail => Style::default().fg(Color::DarkGray),
        StyleName::Footer => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        StyleName::Selected => Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_slots_resolve_distinctly() {
        let a = resolve(StyleName::HeaderGradient(0));
        let b = resolve(StyleName::HeaderGradient(1));
        assert_ne!(a.fg, b.fg);
    }

    #[test]
    fn gradient_slot_overflow_wraps() {
        assert_eq!(
            resolve(StyleName::HeaderGradient(GRADIENT_SLOTS)),
            resolve(StyleName::HeaderGradient(0))
        );
    }

    #[test]
    fn selected_is_visually_distinct() {
        let style = resolve(StyleName::Selected);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
