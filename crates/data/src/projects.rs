//! Recent project directories.
//!
//! Entries live in `projects.json`; touching a directory upserts it with a
//! fresh timestamp.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use portico_model::{DisplayKind, SectionData, SectionItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::source::DataSource;
use crate::store::ListStore;

/// File name of the backing list.
const FILE_NAME: &str = "projects.json";

/// One project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Absolute path of the project directory.
    pub path: PathBuf,
    /// When the project was last active.
    pub last_active: DateTime<Utc>,
}

/// The project-history data source.
#[derive(Debug, Clone)]
pub struct Projects {
    store: ListStore<ProjectEntry>,
}

impl Projects {
    /// Creates the source over `<data_dir>/projects.json`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: ListStore::new(data_dir.join(FILE_NAME)),
        }
    }

    /// Marks `path` as active now, inserting it if unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing list cannot be loaded or saved.
    pub fn touch(&self, path: &Path) -> Result<()> {
        let mut entries = self.store.load()?;
        let now = Utc::now();

        match entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => entry.last_active = now,
            None => entries.push(ProjectEntry {
                path: path.to_path_buf(),
                last_active: now,
            }),
        }

        debug!(path = %path.display(), "touched project");
        self.store.save(&entries)
    }
}

impl DataSource for Projects {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn title(&self) -> &'static str {
        "Projects"
    }

    fn section(&self, limit: usize) -> Result<SectionData> {
        let mut entries = self.store.load()?;
        entries.sort_by(|a, b| b.last_active.cmp(&a.last_active));
        entries.truncate(limit);

        let items = entries
            .into_iter()
            .map(|entry| {
                let label = entry
                    .path
                    .file_name()
                    .map_or_else(|| entry.path.display().to_string(), |n| {
                        n.to_string_lossy().into_owned()
                    });
                SectionItem::new(
                    label,
                    Some(entry.path.display().to_string()),
                    entry.last_active,
                )
            })
            .collect();

        Ok(SectionData {
            items,
            display: DisplayKind::List,
        })
    }
}
