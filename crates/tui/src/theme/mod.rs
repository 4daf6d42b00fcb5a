//! Content providers (themes) and their registry.
//!
//! A [`ContentProvider`] turns a [`RenderContext`] into the text block and
//! highlight spans for one render pass. Providers are interchangeable and
//! registered by name; exactly one is active at a time, selected by
//! configuration and swappable at runtime via
//! [`ProviderRegistry::set_current`].

pub mod compose;
pub mod glyph;
pub mod plain;

use portico_config::Config;
use portico_model::{ContentBlock, Dimensions, MenuItem, SectionData, StyleSpan};

use crate::keymap::DisplayKeymap;
use compose::Composed;

/// One data-provider section as handed to content providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section title ("Recent files", "Sessions", ...).
    pub title: String,
    /// The section contents, already ordered and truncated.
    pub data: SectionData,
}

/// Everything a content provider may read during one pass.
///
/// Providers read this and nothing else, which is what makes
/// [`ContentProvider::content`] idempotent.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Content area extent for this pass.
    pub dims: Dimensions,
    /// The active configuration.
    pub config: &'a Config,
    /// Shortcut hints for footer rendering.
    pub keymaps: &'a [DisplayKeymap],
    /// Data-provider sections, in display order.
    pub sections: &'a [Section],
    /// Index of the selected menu item, if any.
    pub selected: Option<usize>,
}

/// Errors a content provider can report.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A required collaborator is missing; the pass must be skipped.
    #[error("collaborator unavailable: {what}")]
    Unavailable {
        /// Which collaborator is missing.
        what: &'static str,
    },

    /// No provider with the given name is registered.
    #[error("unknown content provider `{name}`")]
    UnknownProvider {
        /// The requested provider name.
        name: String,
    },
}

/// A specialized Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// A pluggable dashboard theme.
///
/// `content` must be idempotent and side-effect free: the same context
/// yields the same block, and nothing global is mutated. `highlights` maps
/// the composed output of that block to style spans; it receives the same
/// context so the two stay consistent.
pub trait ContentProvider {
    /// Registry name of this provider.
    fn name(&self) -> &'static str;

    /// The menu items used when configuration supplies none.
    fn default_menu(&self, icons: bool) -> Vec<MenuItem>;

    /// Produces the content block for one pass.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] when a required collaborator
    /// is missing; the orchestrator then skips buffer mutation for the pass.
    fn content(&self, ctx: &RenderContext<'_>) -> Result<ContentBlock>;

    /// Computes highlight spans against the composed lines.
    fn highlights(
        &self,
        ctx: &RenderContext<'_>,
        block: &ContentBlock,
        composed: &Composed,
    ) -> Vec<StyleSpan>;
}

/// The effective menu for a pass: configured entries, else provider defaults.
///
/// Both the content provider (for rendering) and the app (for dispatch) go
/// through this, so the row the user sees and the action that runs cannot
/// disagree.
#[must_use]
pub fn effective_menu(config: &Config, provider: &dyn ContentProvider) -> Vec<MenuItem> {
    if config.sections.center.menu.is_empty() {
        provider.default_menu(config.icons)
    } else {
        config
            .sections
            .center
            .menu
            .iter()
            .map(|spec| spec.to_item(config.icons))
            .collect()
    }
}

/// The registry of named content providers.
///
/// # Examples
///
/// ```
/// use portico_tui::theme::ProviderRegistry;
///
/// let mut registry = ProviderRegistry::with_defaults();
/// assert_eq!(registry.current().name(), "glyph");
///
/// registry.set_current("plain").unwrap();
/// assert_eq!(registry.current().name(), "plain");
///
/// assert!(registry.set_current("nope").is_err());
/// assert_eq!(registry.current().name(), "plain");
/// ```
pub struct ProviderRegistry {
    providers: Vec<Box<dyn ContentProvider>>,
    current: usize,
}

impl ProviderRegistry {
    /// Creates a registry with the shipped providers, `glyph` active.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            providers: vec![
                Box::new(glyph::GlyphTheme::new()),
                Box::new(plain::PlainTheme::new()),
            ],
            current: 0,
        }
    }

    /// Registers an additional provider.
    pub fn register(&mut self, provider: Box<dyn ContentProvider>) {
        self.providers.push(provider);
    }

    /// The names of all registered providers, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// The active provider.
    ///
    /// # Panics
    ///
    /// Never panics: the registry is constructed non-empty and `current` is
    /// only ever set to a valid index.
    #[must_use]
    pub fn current(&self) -> &dyn ContentProvider {
        self.providers[self.current].as_ref()
    }

    /// Activates the provider named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnknownProvider`] and leaves the active
    /// provider unchanged when no such name is registered.
    pub fn set_current(&mut self, name: &str) -> Result<()> {
        match self.providers.iter().position(|p| p.name() == name) {
            Some(index) => {
                self.current = index;
                Ok(())
            }
            None => Err(ProviderError::UnknownProvider {
                name: name.to_string(),
            }),
        }
    }

    /// Activates the next provider in registration order, wrapping.
    ///
    /// Returns the name of the newly active provider.
    pub fn cycle(&mut self) -> &'static str {
        self.current = (self.current + 1) % self.providers.len();
        self.current().name()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("names", &self.names())
            .field("current", &self.current().name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_config::MenuItemSpec;

    #[test]
    fn registry_defaults_to_glyph() {
        let registry = ProviderRegistry::with_defaults();
        assert_eq!(registry.current().name(), "glyph");
        assert_eq!(registry.names(), vec!["glyph", "plain"]);
    }

    #[test]
    fn set_current_switches_and_rejects_unknown() {
        let mut registry = ProviderRegistry::with_defaults();
        registry.set_current("plain").unwrap();
        assert_eq!(registry.current().name(), "plain");

        let err = registry.set_current("missing").unwrap_err();
        assert!(matches!(err, ProviderError::UnknownProvider { .. }));
        assert_eq!(registry.current().name(), "plain");
    }

    #[test]
    fn cycle_wraps_around() {
        let mut registry = ProviderRegistry::with_defaults();
        assert_eq!(registry.cycle(), "plain");
        assert_eq!(registry.cycle(), "glyph");
    }

    #[test]
    fn effective_menu_prefers_configuration() {
        let registry = ProviderRegistry::with_defaults();
        let mut config = Config::default();

        let defaults = effective_menu(&config, registry.current());
        assert!(!defaults.is_empty());

        config.sections.center.menu = vec![MenuItemSpec {
            icon: None,
            description: "Only one".to_string(),
            key: "o".to_string(),
            command: "only".to_string(),
        }];
        let configured = effective_menu(&config, registry.current());
        assert_eq!(configured.len(), 1);
        assert_eq!(configured[0].description, "Only one");
    }

    #[test]
    fn effective_menu_strips_icons_when_disabled() {
        let registry = ProviderRegistry::with_defaults();
        let config = Config {
            icons: false,
            ..Default::default()
        };

        let menu = effective_menu(&config, registry.current());
        assert!(menu.iter().all(|item| item.icon.is_none()));
    }
}
