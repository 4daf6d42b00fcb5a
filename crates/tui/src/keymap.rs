//! Display keymaps for shortcut rendering.
//!
//! Content providers render shortcut hints from label/description pairs;
//! the actual key-to-action binding lives in the event module. Keeping the
//! two in one file makes drift between the hint line and the real bindings
//! easy to spot in review.

/// One shortcut hint: a key label and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayKeymap {
    /// Key label as shown to the user.
    pub label: &'static str,
    /// Short description of the action.
    pub description: &'static str,
}

impl DisplayKeymap {
    /// Creates a display keymap entry.
    #[must_use]
    pub fn new(label: &'static str, description: &'static str) -> Self {
        Self { label, description }
    }
}

/// The shortcut hints for the dashboard, in display order.
///
/// # Examples
///
/// ```
/// use portico_tui::keymap::display_keymaps;
///
/// let maps = display_keymaps();
/// assert!(maps.iter().any(|m| m.description == "quit"));
/// ```
#[must_use]
pub fn display_keymaps() -> Vec<DisplayKeymap> {
    vec![
        DisplayKeymap::new("↑/↓", "navigate"),
        DisplayKeymap::new("⏎", "select"),
        DisplayKeymap::new("r", "refresh"),
        DisplayKeymap::new("t", "theme"),
        DisplayKeymap::new("q", "quit"),
    ]
}
