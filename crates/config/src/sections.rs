//! Section content configuration.
//!
//! The dashboard is divided into header, center, and footer regions. The
//! header is owned by the active content provider; this module configures
//! what the user can override: the center menu entries and the footer text.

use portico_model::MenuItem;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Content configuration for the dashboard sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsConfig {
    /// Center region configuration.
    #[serde(default)]
    pub center: CenterConfig,

    /// Footer region configuration.
    #[serde(default)]
    pub footer: FooterConfig,
}

impl SectionsConfig {
    /// Validates all section configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the violated field.
    pub fn validate(&self) -> Result<()> {
        self.center.validate()
    }
}

/// Center region configuration: the shortcut menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterConfig {
    /// User-configured menu entries.
    ///
    /// When empty, the active content provider supplies its default list.
    #[serde(default)]
    pub menu: Vec<MenuItemSpec>,
}

impl CenterConfig {
    /// Validates the configured menu entries.
    ///
    /// Descriptions, key labels, and commands must be non-empty, and key
    /// labels must be unique across the menu.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the violated entry.
    pub fn validate(&self) -> Result<()> {
        let mut seen_keys = Vec::new();
        for (index, item) in self.menu.iter().enumerate() {
            let field = |name: &str| format!("sections.center.menu[{index}].{name}");
            if item.description.trim().is_empty() {
                return Err(ConfigError::invalid_field(
                    field("description"),
                    "must not be empty",
                ));
            }
            if item.key.trim().is_empty() {
                return Err(ConfigError::invalid_field(field("key"), "must not be empty"));
            }
            if item.command.trim().is_empty() {
                return Err(ConfigError::invalid_field(
                    field("command"),
                    "must not be empty",
                ));
            }
            if seen_keys.contains(&item.key) {
                return Err(ConfigError::invalid_field(
                    field("key"),
                    format!("duplicate key label `{}`", item.key),
                ));
            }
            seen_keys.push(item.key.clone());
        }
        Ok(())
    }
}

/// Footer region configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    /// Override for the footer line; `None` lets the provider compose one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A user-configured menu entry.
///
/// Configuration-sourced entries are always host commands; callback actions
/// exist only in provider default lists.
///
/// # Examples
///
/// ```
/// use portico_config::MenuItemSpec;
///
/// let spec: MenuItemSpec = serde_json::from_str(
///     r#"{"description": "Find file", "key": "f", "command": "picker files"}"#,
/// ).unwrap();
/// assert!(spec.icon.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemSpec {
    /// Optional icon glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// Key label shown next to the entry.
    pub key: String,
    /// Host command executed on selection.
    pub command: String,
}

impl MenuItemSpec {
    /// Converts the spec into a model menu item.
    ///
    /// When `icons` is false the icon is dropped, degrading to text-only.
    #[must_use]
    pub fn to_item(&self, icons: bool) -> MenuItem {
        MenuItem {
            icon: if icons { self.icon.clone() } else { None },
            description: self.description.clone(),
            key: self.key.clone(),
            action: portico_model::Action::Command(self.command.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(key: &str) -> MenuItemSpec {
        MenuItemSpec {
            icon: None,
            description: "Something".to_string(),
            key: key.to_string(),
            command: "do-something".to_string(),
        }
    }

    #[test]
    fn empty_menu_is_valid() {
        assert!(CenterConfig::default().validate().is_ok());
    }

    #[test]
    fn valid_menu_passes() {
        let center = CenterConfig {
            menu: vec![spec("a"), spec("b")],
        };
        assert!(center.validate().is_ok());
    }

    #[test]
    fn duplicate_keys_rejected_with_field_path() {
        let center = CenterConfig {
            menu: vec![spec("a"), spec("a")],
        };
        let err = center.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField { ref field, .. } if field == "sections.center.menu[1].key"
        ));
    }

    #[test]
    fn empty_command_rejected() {
        let mut bad = spec("a");
        bad.command = String::new();
        let center = CenterConfig { menu: vec![bad] };
        let err = center.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField { ref field, .. }
                if field == "sections.center.menu[0].command"
        ));
    }

    #[test]
    fn to_item_respects_icon_switch() {
        let mut with_icon = spec("a");
        with_icon.icon = Some("".to_string());

        let item = with_icon.to_item(true);
        assert_eq!(item.icon.as_deref(), Some(""));

        let bare = with_icon.to_item(false);
        assert!(bare.icon.is_none());
    }
}
