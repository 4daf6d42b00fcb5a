//! Configuration management for the portico application.
//!
//! This crate handles loading, validating, and persisting configuration,
//! and exposes the nested-path settings store the rest of the application
//! reads from and writes through.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`sections`]: Menu and footer section configuration
//! - [`store`]: Dot-path addressable settings store
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from files with the following priority
//! (highest to lowest):
//!
//! 1. Local config (`./portico.json5` or `./portico.json`)
//! 2. User config (`~/.config/portico/config.json5` or `~/.config/portico/config.json`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! Loading configuration and reading through the store:
//!
//! ```no_run
//! use portico_config::{Config, Settings};
//!
//! # fn example() -> portico_config::Result<()> {
//! let config = Config::load()?;
//! let settings = Settings::new(config);
//!
//! if let Some(theme) = settings.get(Some("theme")) {
//!     println!("Active theme: {theme}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod sections;
pub mod store;

// Re-export primary types at crate root for convenience
pub use config::{Config, LayoutConfig, ListsConfig};
pub use error::{ConfigError, Result};
pub use sections::{CenterConfig, FooterConfig, MenuItemSpec, SectionsConfig};
pub use store::Settings;
