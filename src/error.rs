//! The engine's error taxonomy.
//!
//! Deliberately narrow: every failure mode the engine can produce fits one
//! of four variants. There is no catch-all `Internal` variant here, unlike
//! a tool-facing crate's error type — the surface this library exposes is
//! small enough that every error is enumerable up front.

use std::path::PathBuf;
use thiserror::Error;

/// The crate's result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Everything that can go wrong operating a [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller-supplied argument was malformed: wrong file suffix, an
    /// ill-formed stop-word entry, etc. The attempted operation is a no-op.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing the persistence file, or an indexed file, failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persistence file failed to parse, or violated the `doc_data`/`index`
    /// schema. The engine is left exactly as it was before the load attempt.
    #[error("malformed index at {path}: {reason}")]
    MalformedIndex { path: PathBuf, reason: String },
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedIndex {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_roundtrips() {
        let err = EngineError::InvalidArgument("filepath must end in .json".to_string());
        assert!(err.to_string().contains("filepath must end in .json"));
    }

    #[test]
    fn io_error_includes_path() {
        let err = EngineError::io(
            "/tmp/does-not-exist.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        );
        assert!(err.to_string().contains("does-not-exist.json"));
    }
}
