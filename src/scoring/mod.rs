//! Turning per-term statistics into a numeric contribution to a document's
//! score.
//!
//! Modeled as a capability type — a trait object selected once at engine
//! construction — rather than a class hierarchy: `Scorer` has exactly one
//! method, and BM25/QL share no state or base behavior worth factoring out.

pub mod bm25;
pub mod ql;

pub use bm25::Bm25Scorer;
pub use ql::QlScorer;

/// Per-(term, candidate document) statistics gathered during the DAAT
/// merge. A scorer sees only this tuple — never raw positions, never
/// another scorer's intermediate state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermStats {
    /// Occurrences of this term in the query.
    pub qf: u32,
    /// Occurrences of this term in the candidate document (0 if absent).
    pub df: u32,
    /// Occurrences of this term across the whole corpus.
    pub cf: u64,
    /// Number of documents containing this term.
    pub nd: u64,
    /// Total number of documents in the corpus.
    pub nc: u64,
    /// Length, in tokens, of the candidate document.
    pub dl: u64,
    /// Total number of tokens across the corpus.
    pub dc: u64,
}

impl TermStats {
    /// `dc / nc`: the average document length. `0.0` if the corpus is
    /// empty, which callers must guard against before scoring — both
    /// scorers below assume `nc > 0` and `dc > 0`.
    #[must_use]
    pub fn avdl(&self) -> f64 {
        self.dc as f64 / self.nc as f64
    }
}

/// Computes a document's contribution for a single query term from its
/// aggregated statistics.
pub trait Scorer: Send + Sync {
    fn contribution(&self, stats: &TermStats) -> f64;
}
