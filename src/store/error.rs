//! Document store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the content directory or one of its files.
///
/// Malformed metadata is never reported here; it is handed to the
/// normalizer as [`RawMetadata::Malformed`](super::RawMetadata::Malformed).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(super) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_store_error_display_and_source() {
        let err = StoreError::io(
            "content/articles/a.mdx",
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot read `content/articles/a.mdx`");
        assert!(std::error::Error::source(&err).is_some());
    }
}
