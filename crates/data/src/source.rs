//! The data-source contract consumed by content providers.

use portico_model::SectionData;

use crate::error::Result;

/// A provider of one dashboard list section.
///
/// Implementations load their backing list, order it newest first, and
/// truncate to the requested limit. The content provider consuming a source
/// never sees the persistence format, only [`SectionData`].
pub trait DataSource {
    /// Stable identifier of this source (used in logs and tests).
    fn name(&self) -> &'static str;

    /// Human-readable section title ("Recent files", "Sessions", ...).
    fn title(&self) -> &'static str;

    /// Returns the section contents, newest first, at most `limit` items.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing list cannot be loaded.
    fn section(&self, limit: usize) -> Result<SectionData>;
}
