//! Shared model types for the portico application.
//!
//! This crate defines the core types used across all portico components,
//! including viewport geometry, content blocks, style spans, and messages.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`geometry`]: Viewport, layout categories, and computed dimensions
//! - [`content`]: Content blocks, menu items, actions, and section data
//! - [`style`]: Semantic style names and style spans
//! - [`message`]: TUI event messages
//!
//! # Examples
//!
//! Building a menu item with a host-command action:
//!
//! ```
//! use portico_model::{Action, MenuItem};
//!
//! let item = MenuItem::command("󰈞", "Find file", "f", "picker files");
//! assert_eq!(item.key, "f");
//! assert!(matches!(item.action, Action::Command(_)));
//! ```

pub mod content;
pub mod geometry;
pub mod message;
pub mod style;

// Re-export primary types at crate root for convenience
pub use content::{
    Action, AppReaction, ContentBlock, DisplayKind, MenuItem, SectionData, SectionItem,
};
pub use geometry::{Dimensions, LayoutCategory, LayoutMode, Viewport};
pub use message::Message;
pub use style::{GRADIENT_SLOTS, StyleName, StyleSpan};
