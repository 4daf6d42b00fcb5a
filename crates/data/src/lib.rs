//! Data providers for the portico dashboard.
//!
//! This crate feeds the dashboard's list sections: recently opened files,
//! saved sessions, and recent project directories. Each provider persists a
//! flat JSON list under the data directory and exposes its contents through
//! the shared [`DataSource`] trait, newest first and truncated to the
//! caller's limit.
//!
//! # Overview
//!
//! - [`RecentFiles`]: recently opened files, re-stamped on every open
//! - [`Sessions`]: named session snapshots with stable ids
//! - [`Projects`]: recently active project directories
//! - [`store::ListStore`]: the flat-list persistence all providers share
//! - [`Error`]: error types for data operations
//!
//! # Examples
//!
//! ```no_run
//! use portico_data::{DataSource, RecentFiles, store::default_data_dir};
//!
//! # fn example() -> portico_data::Result<()> {
//! let data_dir = default_data_dir()?;
//! let recent = RecentFiles::new(&data_dir);
//!
//! for item in recent.section(8)?.items {
//!     println!("{} ({:?})", item.label, item.detail);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod projects;
pub mod recent;
pub mod sessions;
pub mod source;
pub mod store;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use projects::{ProjectEntry, Projects};
pub use recent::{RecentEntry, RecentFiles};
pub use sessions::{SessionEntry, Sessions};
pub use source::DataSource;
