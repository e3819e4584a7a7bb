//! Query Likelihood with Dirichlet smoothing.

use super::{Scorer, TermStats};

/// Query Likelihood, Dirichlet-smoothed with `mu = 1500`.
///
/// The engine's default scorer (see `EngineConfig`): unlike BM25 it degrades
/// gracefully to a `0` contribution rather than a divide-by-zero when the
/// smoothed probability is non-positive, which is why it is the safer
/// default for an engine a caller might query before indexing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct QlScorer;

const MU: f64 = 1500.0;

impl Scorer for QlScorer {
    fn contribution(&self, stats: &TermStats) -> f64 {
        let p = (stats.df as f64 + MU * stats.cf as f64 / stats.dc as f64)
            / (stats.dl as f64 + MU);
        if p > 0.0 {
            p.log10()
        } else {
            0.0
        }
    }
}
