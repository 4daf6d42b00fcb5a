//! Flat JSON list persistence.
//!
//! Every data provider keeps its entries as one flat JSON array in a file
//! under the data directory. [`ListStore`] handles the load/save mechanics:
//! a missing file is an empty list, a malformed file is an error, and saves
//! overwrite the whole file.

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};

/// Default directory name under the user data dir.
const DATA_DIR: &str = "portico";

/// Returns the default data directory, typically `~/.local/share/portico`.
///
/// # Errors
///
/// Returns an error if the user data directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(DATA_DIR))
        .ok_or(Error::NoDataDirectory)
}

/// Load/save for one flat JSON list file.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use portico_data::store::ListStore;
///
/// # fn example() -> portico_data::Result<()> {
/// let store: ListStore<String> = ListStore::new(PathBuf::from("/tmp/labels.json"));
/// let mut labels = store.load()?;
/// labels.push("hello".to_string());
/// store.save(&labels)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ListStore<T> {
    path: PathBuf,
    _entry: PhantomData<T>,
}

impl<T> ListStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a store over the given list file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _entry: PhantomData,
        }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Loads the list.
    ///
    /// A missing file yields an empty list. A file that exists but does not
    /// parse is an error; silently discarding a user's history on a parse
    /// hiccup would be worse than surfacing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read (other than not existing)
    /// or contains invalid JSON.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<T>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let entries: Vec<T> = serde_json::from_str(&content).map_err(|source| {
                    warn!(error = %source, "failed to parse data file");
                    Error::Malformed {
                        path: self.path.clone(),
                        source,
                    }
                })?;
                debug!(count = entries.len(), "loaded data file");
                Ok(entries)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("data file not found, starting empty");
                Ok(Vec::new())
            }
            Err(source) => {
                warn!(error = %source, "failed to read data file");
                Err(Error::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    /// Saves the list, overwriting the file.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    #[instrument(skip(self, entries), fields(path = %self.path.display()))]
    pub fn save(&self, entries: &[T]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: self.path.clone(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(entries).map_err(|source| Error::Malformed {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("data file saved");
        Ok(())
    }
}
