//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a station or line listing.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The listing file could not be read
    #[error("failed to read listing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line carries a symbol but no name
    #[error("line {line}: symbol {symbol:?} has no name")]
    MissingName { line: usize, symbol: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::MissingName {
            line: 4,
            symbol: 'Q',
        };
        assert_eq!(err.to_string(), "line 4: symbol 'Q' has no name");

        let err = CatalogError::Io {
            path: PathBuf::from("stations.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read listing stations.txt: not found"
        );
    }
}
