//! Recently opened files.
//!
//! Entries live in `recent_files.json` as a flat list of path + timestamp
//! pairs. Recording a path that is already present re-stamps it instead of
//! duplicating it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use portico_model::{DisplayKind, SectionData, SectionItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::source::DataSource;
use crate::store::ListStore;

/// File name of the backing list.
const FILE_NAME: &str = "recent_files.json";

/// One recently opened file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// When the file was last opened.
    pub last_opened: DateTime<Utc>,
}

/// The recent-files data source.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use portico_data::{DataSource, RecentFiles};
///
/// # fn example() -> portico_data::Result<()> {
/// let recent = RecentFiles::new(Path::new("/tmp/portico-data"));
/// recent.record(Path::new("/home/me/notes.md"))?;
///
/// let section = recent.section(8)?;
/// assert!(section.items.len() <= 8);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecentFiles {
    store: ListStore<RecentEntry>,
}

impl RecentFiles {
    /// Creates the source over `<data_dir>/recent_files.json`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: ListStore::new(data_dir.join(FILE_NAME)),
        }
    }

    /// Records that `path` was opened now.
    ///
    /// An existing entry for the same path is re-stamped; otherwise a new
    /// entry is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing list cannot be loaded or saved.
    pub fn record(&self, path: &Path) -> Result<()> {
        let mut entries = self.store.load()?;
        let now = Utc::now();

        match entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => entry.last_opened = now,
            None => entries.push(RecentEntry {
                path: path.to_path_buf(),
                last_opened: now,
            }),
        }

        debug!(path = %path.display(), "recorded recent file");
        self.store.save(&entries)
    }
}

impl DataSource for RecentFiles {
    fn name(&self) -> &'static str {
        "recent_files"
    }

    fn title(&self) -> &'static str {
        "Recent files"
    }

    fn section(&self, limit: usize) -> Result<SectionData> {
        let mut entries = self.store.load()?;
        entries.sort_by(|a, b| b.last_opened.cmp(&a.last_opened));
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
                let detail = entry
                    .path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.display().to_string());
                SectionItem::new(label, detail, entry.last_opened)
            })
            .collect();

        Ok(SectionData {
            items,
            display: DisplayKind::List,
        })
    }
}
