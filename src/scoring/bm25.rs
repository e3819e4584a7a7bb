//! Okapi BM25 with the classic Robertson/Sparck-Jones parameters.

use super::{Scorer, TermStats};

/// BM25 with `k1 = 1.2`, `k2 = 100`, `b = 0.75`.
///
/// Undefined on an empty corpus (`avdl` divides by `nc`); callers must not
/// construct a `TermStats` from an empty index. [`crate::SearchEngine::search`]
/// short-circuits to an empty result list before any scorer sees a query
/// against an empty engine, so this type never needs to guard against it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bm25Scorer;

const K1: f64 = 1.2;
const K2: f64 = 100.0;
const B: f64 = 0.75;

impl Scorer for Bm25Scorer {
    fn contribution(&self, stats: &TermStats) -> f64 {
        let avdl = stats.avdl();
        let k = K1 * ((1.0 - B) + B * stats.dl as f64 / avdl);

        let idf = ((stats.nd as f64 + 0.5) / (stats.nc as f64 - stats.nd as f64 + 0.5))
            .recip()
            .log10();
        let tf_doc = (K1 + 1.0) * stats.df as f64 / (k + stats.df as f64);
        let tf_query = (K2 + 1.0) * stats.qf as f64 / (K2 + stats.qf as f64);

        idf * tf_doc * tf_query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(qf: u32, df: u32, cf: u64, nd: u64, nc: u64, dl: u64, dc: u64) -> TermStats {
        TermStats {
            qf,
            df,
            cf,
            nd,
            nc,
            dl,
            dc,
        }
    }

    #[test]
    fn absent_term_contributes_zero_tf_component() {
        // df = 0 zeroes out the term-frequency factor regardless of idf.
        let s = stats(1, 0, 0, 3, 10, 50, 500);
        let score = Bm25Scorer.contribution(&s);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn more_frequent_term_in_doc_scores_higher() {
        let low = stats(1, 1, 10, 3, 10, 50, 500);
        let high = stats(1, 5, 10, 3, 10, 50, 500);
        assert!(Bm25Scorer.contribution(&high) > Bm25Scorer.contribution(&low));
    }

    #[test]
    fn rarer_term_across_corpus_scores_higher_via_idf() {
        let common = stats(1, 2, 20, 8, 10, 50, 500);
        let rare = stats(1, 2, 20, 1, 10, 50, 500);
        assert!(Bm25Scorer.contribution(&rare) > Bm25Scorer.contribution(&common));
    }
}
