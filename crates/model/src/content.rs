//! Content blocks, menu items, and data-provider section types.
//!
//! A [`ContentBlock`] is what a content provider produces for one render
//! pass: ordered header, center, and footer line groups. [`MenuItem`] models
//! a single shortcut entry; its [`Action`] is a tagged variant dispatched by
//! the app layer, never inspected by providers. [`SectionData`] is the shape
//! every data provider (recent files, sessions, projects) returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The text content of one render pass, grouped by vertical region.
///
/// Produced fresh by the active content provider on every pass and never
/// mutated in place. Line counts here drive highlight indexing, so the
/// composed output must write exactly these lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBlock {
    /// Lines rendered at the top of the surface (typically ASCII art).
    pub header: Vec<String>,
    /// Lines rendered in the middle (menu and list sections).
    pub center: Vec<String>,
    /// Lines rendered at the bottom (shortcut summary, footer text).
    pub footer: Vec<String>,
}

impl ContentBlock {
    /// Total number of content lines across all regions.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.header.len() + self.center.len() + self.footer.len()
    }

    /// Returns `true` if no region has any lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.center.is_empty() && self.footer.is_empty()
    }
}

/// Side effects a callback action may request from the app.
///
/// Callbacks fill in this value; the app's action executor applies it after
/// the callback returns. This keeps callbacks free of host handles and makes
/// dispatch explicit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppReaction {
    /// Request application shutdown.
    pub quit: bool,
    /// Request a dashboard refresh pass.
    pub refresh: bool,
    /// A host command to execute.
    pub command: Option<String>,
}

/// The action behind a menu item.
///
/// Either a host-command string or a callback; resolved by the app-layer
/// action executor. Configuration-sourced items are always commands;
/// callbacks exist only in provider default lists.
#[derive(Clone)]
pub enum Action {
    /// Execute a host command verbatim.
    Command(String),
    /// Invoke a callback that fills in an [`AppReaction`].
    Callback(fn(&mut AppReaction)),
}

impl Action {
    /// Runs the action against a fresh reaction and returns it.
    ///
    /// Command actions become `reaction.command`; callbacks run directly.
    #[must_use]
    pub fn react(&self) -> AppReaction {
        let mut reaction = AppReaction::default();
        match self {
            Self::Command(cmd) => reaction.command = Some(cmd.clone()),
            Self::Callback(f) => f(&mut reaction),
        }
        reaction
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(cmd) => f.debug_tuple("Command").field(cmd).finish(),
            Self::Callback(_) => f.debug_tuple("Callback").field(&"<fn>").finish(),
        }
    }
}

/// A single shortcut entry on the dashboard.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Optional icon glyph rendered before the description.
    pub icon: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// Key label shown right-aligned (the binding itself lives elsewhere).
    pub key: String,
    /// What selecting this item does.
    pub action: Action,
}

impl MenuItem {
    /// Creates a menu item backed by a host command.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_model::MenuItem;
    ///
    /// let item = MenuItem::command("", "New file", "n", "edit-new");
    /// assert_eq!(item.description, "New file");
    /// ```
    #[must_use]
    pub fn command(
        icon: impl Into<String>,
        description: impl Into<String>,
        key: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            icon: Some(icon.into()),
            description: description.into(),
            key: key.into(),
            action: Action::Command(command.into()),
        }
    }

    /// Creates a menu item backed by a callback.
    #[must_use]
    pub fn callback(
        icon: impl Into<String>,
        description: impl Into<String>,
        key: impl Into<String>,
        callback: fn(&mut AppReaction),
    ) -> Self {
        Self {
            icon: Some(icon.into()),
            description: description.into(),
            key: key.into(),
            action: Action::Callback(callback),
        }
    }

    /// Returns a copy with the icon removed (text-only degrade).
    #[must_use]
    pub fn without_icon(&self) -> Self {
        Self {
            icon: None,
            ..self.clone()
        }
    }
}

/// How a data-provider section should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayKind {
    /// One item per line.
    #[default]
    List,
    /// Items flowed into columns.
    Grid,
}

/// A single entry in a data-provider section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionItem {
    /// Primary label (file name, session name, project directory).
    pub label: String,
    /// Secondary detail (parent directory, session path), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// When this entry was last touched; drives ordering.
    pub stamp: DateTime<Utc>,
}

impl SectionItem {
    /// Creates a section item.
    #[must_use]
    pub fn new(label: impl Into<String>, detail: Option<String>, stamp: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            detail,
            stamp,
        }
    }
}

/// What every data provider returns: ordered items plus a display hint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionData {
    /// Items, newest first, already truncated to the configured limit.
    pub items: Vec<SectionItem>,
    /// How the section should be laid out.
    #[serde(default)]
    pub display: DisplayKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn content_block_line_count() {
        let block = ContentBlock {
            header: vec!["a".into(), "b".into()],
            center: vec!["c".into()],
            footer: vec![],
        };
        assert_eq!(block.line_count(), 3);
        assert!(!block.is_empty());
        assert!(ContentBlock::default().is_empty());
    }

    #[test]
    fn command_action_reacts_with_command() {
        let item = MenuItem::command("x", "Open", "o", "open-thing");
        let reaction = item.action.react();
        assert_eq!(reaction.command.as_deref(), Some("open-thing"));
        assert!(!reaction.quit);
    }

    #[test]
    fn callback_action_runs() {
        fn quit(r: &mut AppReaction) {
            r.quit = true;
        }
        let item = MenuItem::callback("x", "Quit", "q", quit);
        let reaction = item.action.react();
        assert!(reaction.quit);
        assert!(reaction.command.is_none());
    }

    #[test]
    fn without_icon_strips_icon_only() {
        let item = MenuItem::command("", "New file", "n", "edit-new");
        let bare = item.without_icon();
        assert!(bare.icon.is_none());
        assert_eq!(bare.description, item.description);
        assert_eq!(bare.key, item.key);
    }

    #[test]
    fn section_data_roundtrip() {
        let data = SectionData {
            items: vec![SectionItem::new(
                "main.rs",
                Some("src".to_string()),
                Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            )],
            display: DisplayKind::List,
        };
        let json = serde_json::to_string(&data).expect("serialize");
        let parsed: SectionData = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(data, parsed);
    }

    #[test]
    fn display_kind_json_format() {
        let json = serde_json::to_string(&DisplayKind::Grid).expect("serialize");
        assert_eq!(json, r#""grid""#);
    }
}
