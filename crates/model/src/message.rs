//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use portico_model::Message;
///
/// let msg = Message::NavigateDown;
/// assert!(matches!(msg, Message::NavigateDown));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection up one row.
    NavigateUp,
    /// Move selection down one row.
    NavigateDown,
    /// Activate the currently selected item.
    Select,
    /// Escape: close the dashboard.
    Escape,
    /// Quit the application.
    Quit,
    /// Re-run the render pass with fresh content.
    Refresh,
    /// Switch to the next registered content provider.
    CycleTheme,
    /// The terminal was resized to the given geometry.
    Resized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_model::Message;
    ///
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::NavigateUp | Self::NavigateDown)
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_model::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Refresh.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message invalidates the current layout.
    #[must_use]
    pub fn is_geometry(&self) -> bool {
        matches!(self, Self::Resized { .. })
    }
}
