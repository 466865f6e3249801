//! Map loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The map file could not be read
    #[error("failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The map has no rows
    #[error("map is empty")]
    Empty,
}
