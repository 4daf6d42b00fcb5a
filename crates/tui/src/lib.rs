//! Terminal UI for the portico application.
//!
//! This crate provides the dashboard core and its Ratatui-based front end.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`host`]: The display abstraction (buffers, surfaces, spans) and its
//!   in-memory implementation
//! - [`geometry`]: Responsive dimension calculation
//! - [`surface`]: Dashboard lifecycle state machine
//! - [`theme`]: Content providers and their registry
//! - [`highlight`]: Style-span application
//! - [`render`]: The render orchestrator
//! - [`animate`]: Stepped resize animation
//! - [`keymap`]: Shortcut hints for footer rendering
//! - [`palette`]: Semantic style resolution
//! - [`app`]: Main application struct and run loop
//! - [`event`]: Event handling and key mappings
//! - [`view`]: Frame rendering of the host model
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//!
//! # Example
//!
//! ```no_run
//! use portico_config::Config;
//! use portico_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let config = Config::load()?;
//!     let data_dir = portico_data::store::default_data_dir()?;
//!     let mut app = App::new(config, &data_dir);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod animate;
pub mod app;
pub mod event;
pub mod geometry;
pub mod highlight;
pub mod host;
pub mod keymap;
pub mod palette;
pub mod render;
pub mod surface;
pub mod terminal;
pub mod theme;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use surface::{CreateOutcome, Dashboard};
