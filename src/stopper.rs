//! Rejecting high-frequency words before they reach the stemmer.
//!
//! Stopping happens after lowercasing (tokens arrive already lowercased)
//! and before stemming, so stop-word files are written in surface form —
//! `"running"`, not `"run"`.

use crate::error::{EngineError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Decides whether a token should be dropped before stemming.
pub trait Stopper: Send + Sync {
    fn is_stopword(&self, token: &str) -> bool;
}

/// The default stopper: keeps every token.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStopper;

impl Stopper for NullStopper {
    #[inline]
    fn is_stopword(&self, _token: &str) -> bool {
        false
    }
}

/// A stopper backed by a finite set of lowercase words.
#[derive(Debug, Default, Clone)]
pub struct SetStopper {
    words: HashSet<String>,
}

impl SetStopper {
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Loads a stop-word file: one lowercase word per line, leading/trailing
    /// whitespace trimmed, blank lines ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| EngineError::io(path.to_path_buf(), e))?;
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string);
        Ok(Self::new(words))
    }
}

impl Stopper for SetStopper {
    fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_stopper_keeps_everything() {
        let s = NullStopper;
        assert!(!s.is_stopword("the"));
        assert!(!s.is_stopword(""));
    }

    #[test]
    fn set_stopper_rejects_configured_words() {
        let s = SetStopper::new(["the".to_string(), "a".to_string()]);
        assert!(s.is_stopword("the"));
        assert!(!s.is_stopword("cat"));
    }

    #[test]
    fn from_file_trims_and_skips_blanks() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        writeln!(f, "the ").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "  a").unwrap();
        let s = SetStopper::from_file(f.path()).unwrap();
        assert!(s.is_stopword("the"));
        assert!(s.is_stopword("a"));
        assert!(!s.is_stopword(""));
    }

    #[test]
    fn missing_stopword_file_is_io_error() {
        let err = SetStopper::from_file("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }
}
