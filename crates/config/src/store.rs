//! Nested-path settings store.
//!
//! [`Settings`] wraps a validated [`Config`] together with its JSON tree and
//! exposes the dot-separated addressing contract used by the rest of the
//! application: `get("layout.mode")`, `set("lists.recent_limit", 12)`,
//! `update({...})`. Reads hand out defensive copies; mutations are validated
//! against the full configuration schema and rejected wholesale on failure,
//! keeping the prior valid configuration.

use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// A validated configuration plus its addressable JSON tree.
///
/// The tree and the typed config are kept in lockstep: every successful
/// mutation re-serializes into both representations.
///
/// # Examples
///
/// ```
/// use portico_config::{Config, Settings};
/// use serde_json::json;
///
/// let mut settings = Settings::new(Config::default());
/// settings.set("lists.recent_limit", json!(12)).unwrap();
/// assert_eq!(settings.config().lists.recent_limit, 12);
///
/// // Invalid updates are rejected and the prior value is kept
/// assert!(settings.set("lists.recent_limit", json!(0)).is_err());
/// assert_eq!(settings.config().lists.recent_limit, 12);
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    config: Config,
    tree: Value,
}

impl Settings {
    /// Creates a settings store from a validated configuration.
    ///
    /// # Panics
    ///
    /// Does not panic: `Config` serialization to a JSON tree is infallible
    /// for the types involved, so the internal conversion uses a default
    /// tree on the (unreachable) error path.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let tree = serde_json::to_value(&config).unwrap_or_else(|_| Value::Object(Map::new()));
        Self { config, tree }
    }

    /// Returns the typed configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads a value by dot-separated key, or the whole tree when `None`.
    ///
    /// Returns a defensive copy; mutating the returned value does not touch
    /// the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use portico_config::{Config, Settings};
    ///
    /// let settings = Settings::new(Config::default());
    /// let theme = settings.get(Some("theme")).unwrap();
    /// assert_eq!(theme.as_str(), Some("glyph"));
    /// assert!(settings.get(Some("no.such.key")).is_none());
    /// assert!(settings.get(None).is_some());
    /// ```
    #[must_use]
    pub fn get(&self, key: Option<&str>) -> Option<Value> {
        match key {
            None => Some(self.tree.clone()),
            Some(path) => lookup(&self.tree, path).cloned(),
        }
    }

    /// Sets a single value by dot-separated key.
    ///
    /// Missing intermediate objects are created. The resulting tree must
    /// deserialize into a valid [`Config`]; otherwise the mutation is
    /// rejected and the prior configuration is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] when the path traverses a
    /// non-object value, and [`ConfigError::InvalidField`] (or a
    /// deserialization error) when validation fails.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut candidate = self.tree.clone();
        assign(&mut candidate, key, value)?;
        self.commit(candidate)
    }

    /// Applies several dot-keyed values as one atomic update.
    ///
    /// Either every entry applies and validates, or nothing changes.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::set`]; the first failing entry aborts the whole
    /// update.
    pub fn update(&mut self, entries: Map<String, Value>) -> Result<()> {
        let mut candidate = self.tree.clone();
        for (key, value) in entries {
            assign(&mut candidate, &key, value)?;
        }
        self.commit(candidate)
    }

    /// Validates a candidate tree and commits it on success.
    fn commit(&mut self, candidate: Value) -> Result<()> {
        let config: Config = serde_json::from_value(candidate.clone()).map_err(|e| {
            ConfigError::InvalidField {
                field: "<root>".to_string(),
                reason: e.to_string(),
            }
        })?;
        config.validate()?;
        self.config = config;
        self.tree = candidate;
        Ok(())
    }
}

/// Resolves a dot-separated path against a JSON tree.
fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Writes `value` at a dot-separated path, creating intermediate objects.
fn assign(tree: &mut Value, path: &str, value: Value) -> Result<()> {
    if path.is_empty() {
        return Err(ConfigError::UnknownKey {
            key: path.to_string(),
        });
    }

    let mut current = tree;
    let segments: Vec<&str> = path.split('.').collect();
    let (last, intermediate) = segments.split_last().ok_or_else(|| ConfigError::UnknownKey {
        key: path.to_string(),
    })?;

    for segment in intermediate {
        let object = current.as_object_mut().ok_or_else(|| ConfigError::UnknownKey {
            key: path.to_string(),
        })?;
        current = object
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let object = current.as_object_mut().ok_or_else(|| ConfigError::UnknownKey {
        key: path.to_string(),
    })?;
    object.insert((*last).to_string(), value);
    Ok(())
}
