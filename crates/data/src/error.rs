//! Error types for data-provider operations.

use std::path::PathBuf;

/// Errors that can occur while loading or saving provider lists.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred while touching a list file.
    #[error("I/O error on data file {path}: {source}")]
    Io {
        /// The list file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A list file exists but does not parse.
    #[error("malformed data file {path}: {source}")]
    Malformed {
        /// The list file involved.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to determine the user data directory.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

/// A specialized Result type for data-provider operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_io() {
        let err = Error::Io {
            path: PathBuf::from("/tmp/recent.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/recent.json"));
    }

    #[test]
    fn error_display_no_data_directory() {
        assert_eq!(
            Error::NoDataDirectory.to_string(),
            "could not determine data directory"
        );
    }
}
