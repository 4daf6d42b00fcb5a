//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the portico application.

use std::path::PathBuf;

use portico_model::LayoutMode;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::sections::SectionsConfig;

/// Maximum number of animation steps a resize transition may take.
pub const MAX_ANIMATION_STEPS: u32 = 30;

/// Maximum number of entries a list section may be configured to show.
pub const MAX_LIST_LIMIT: usize = 50;

/// The main configuration struct for the portico application.
///
/// This struct is the central point for all application configuration:
/// the active theme, layout behavior, section contents, and list limits.
///
/// # Examples
///
/// ```
/// use portico_config::Config;
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.theme, "glyph");
/// assert!(config.icons);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the active content provider.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Layout mode and resize animation behavior.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Section contents (menu entries, footer text).
    #[serde(default)]
    pub sections: SectionsConfig,

    /// Entry limits for the list sections.
    #[serde(default)]
    pub lists: ListsConfig,

    /// Whether menu icons are rendered.
    ///
    /// Disable when the terminal font has no glyph coverage; items degrade
    /// to text-only.
    #[serde(default = "default_icons")]
    pub icons: bool,

    /// Override for the data directory holding recent-file, session, and
    /// project lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_theme() -> String {
    "glyph".to_string()
}

fn default_icons() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            layout: LayoutConfig::default(),
            sections: SectionsConfig::default(),
            lists: ListsConfig::default(),
            icons: true,
            data_dir: None,
        }
    }
}

/// Layout mode and resize animation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Floating overlay or full-viewport surface.
    #[serde(default)]
    pub mode: LayoutMode,

    /// Whether surface resizes animate over several steps.
    #[serde(default = "default_animate")]
    pub animate: bool,

    /// Number of steps an animated resize takes.
    #[serde(default = "default_animation_steps")]
    pub animation_steps: u32,
}

fn default_animate() -> bool {
    true
}

fn default_animation_steps() -> u32 {
    5
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::default(),
            animate: true,
            animation_steps: default_animation_steps(),
        }
    }
}

impl LayoutConfig {
    /// Validates the layout configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the violated field.
    pub fn validate(&self) -> Result<()> {
        if self.animation_steps == 0 {
            return Err(ConfigError::invalid_field(
                "layout.animation_steps",
                "must be at least 1",
            ));
        }
        if self.animation_steps > MAX_ANIMATION_STEPS {
            return Err(ConfigError::invalid_field(
                "layout.animation_steps",
                format!("must be at most {MAX_ANIMATION_STEPS}"),
            ));
        }
        Ok(())
    }
}

/// Entry limits for the recent-files, sessions, and projects sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsConfig {
    /// Maximum recent files shown.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Maximum sessions shown.
    #[serde(default = "default_session_limit")]
    pub session_limit: usize,

    /// Maximum project directories shown.
    #[serde(default = "default_project_limit")]
    pub project_limit: usize,
}

fn default_recent_limit() -> usize {
    8
}

fn default_session_limit() -> usize {
    4
}

fn default_project_limit() -> usize {
    4
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            session_limit: default_session_limit(),
            project_limit: default_project_limit(),
        }
    }
}

impl ListsConfig {
    /// Validates the list limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the violated field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("lists.recent_limit", self.recent_limit),
            ("lists.session_limit", self.session_limit),
            ("lists.project_limit", self.project_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::invalid_field(field, "must be at least 1"));
            }
            if value > MAX_LIST_LIMIT {
                return Err(ConfigError::invalid_field(
                    field,
                    format!("must be at most {MAX_LIST_LIMIT}"),
                ));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./portico.json5` or `./portico.json`
    /// 2. User: `~/.config/portico/config.json5` or `~/.config/portico/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use portico_config::Config;
    ///
    /// # fn example() -> portico_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Active theme: {}", config.theme);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to save to
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// Checks that all values are within acceptable ranges. The returned
    /// error names the specific violated field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.theme = String::new();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.theme.trim().is_empty() {
            return Err(ConfigError::invalid_field("theme", "must not be empty"));
        }
        self.layout.validate()?;
        self.lists.validate()?;
        self.sections.validate()?;
        Ok(())
    }
}
