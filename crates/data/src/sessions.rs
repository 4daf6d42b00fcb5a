//! Saved editing sessions.
//!
//! A session is a named snapshot of a working directory, stamped on save.
//! Entries live in `sessions.json`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use portico_model::{DisplayKind, SectionData, SectionItem};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::source::DataSource;
use crate::store::ListStore;

/// File name of the backing list.
const FILE_NAME: &str = "sessions.json";

/// One saved session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEntry {
    /// Stable identifier of the session.
    pub id: Uuid,
    /// User-facing session name.
    pub name: String,
    /// Working directory the session captures.
    pub path: PathBuf,
    /// When the session was last saved.
    pub saved_at: DateTime<Utc>,
}

/// The saved-sessions data source.
#[derive(Debug, Clone)]
pub struct Sessions {
    store: ListStore<SessionEntry>,
}

impl Sessions {
    /// Creates the source over `<data_dir>/sessions.json`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: ListStore::new(data_dir.join(FILE_NAME)),
        }
    }

    /// Saves a session under `name`, replacing a same-named one.
    ///
    /// Replacing keeps the original id so external references stay valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing list cannot be loaded or saved.
    pub fn save(&self, name: &str, path: &Path) -> Result<SessionEntry> {
        let mut entries = self.store.load()?;
        let now = Utc::now();

        let entry = match entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => {
                existing.path = path.to_path_buf();
                existing.saved_at = now;
                existing.clone()
            }
            None => {
                let entry = SessionEntry {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    path: path.to_path_buf(),
                    saved_at: now,
                };
                entries.push(entry.clone());
                entry
            }
        };

        debug!(name, path = %path.display(), "saved session");
        self.store.save(&entries)?;
        Ok(entry)
    }

    /// Deletes the session named `name`.
    ///
    /// # Returns
    ///
    /// `true` if a session was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing list cannot be loaded or saved.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut entries = self.store.load()?;
        let before = entries.len();
        entries.retain(|e| e.name != name);
        let removed = entries.len() < before;
        if removed {
            self.store.save(&entries)?;
        }
        Ok(removed)
    }
}

impl DataSource for Sessions {
    fn name(&self) -> &'static str {
        "sessions"
    }

    fn title(&self) -> &'static str {
        "Sessions"
    }

    fn section(&self, limit: usize) -> Result<SectionData> {
        let mut entries = self.store.load()?;
        entries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        entries.truncate(limit);

        let items = entries
            .into_iter()
            .map(|entry| {
                SectionItem::new(
                    entry.name,
                    Some(entry.path.display().to_string()),
                    entry.saved_at,
                )
            })
            .collect();

        Ok(SectionData {
            items,
            display: DisplayKind::List,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_list() {
        let dir = TempDir::new().unwrap();
        let sessions = Sessions::new(dir.path());

        sessions.save("api-work", Path::new("/work/api")).unwrap();
        sessions.save("blog", Path::new("/work/blog")).unwrap();

        let section = sessions.section(10).unwrap();
        assert_eq!(section.items.len(), 2);
        assert_eq!(section.items[0].label, "blog");
    }

    #[test]
    fn save_same_name_replaces_and_keeps_id() {
        let dir = TempDir::new().unwrap();
        let sessions = Sessions::new(dir.path());

        let first = sessions.save("work", Path::new("/a")).unwrap();
        let second = sessions.save("work", Path::new("/b")).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.path, PathBuf::from("/b"));

        let section = sessions.section(10).unwrap();
        assert_eq!(section.items.len(), 1);
        assert_eq!(section.items[0].detail.as_deref(), Some("/b"));
    }

    #[test]
    fn delete_removes_entry() {
        let dir = TempDir::new().unwrap();
        let sessions = Sessions::new(dir.path());

        sessions.save("gone", Path::new("/g")).unwrap();
        assert!(sessions.delete("gone").unwrap());
        assert!(!sessions.delete("gone").unwrap());
        assert!(sessions.section(10).unwrap().items.is_empty());
    }
}
