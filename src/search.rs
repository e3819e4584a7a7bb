//! The document-at-a-time retrieval loop.
//!
//! Walks every query term's inverted list in lockstep, lowest `doc_id`
//! first, scoring each document once against every query term before
//! advancing past it. Cursors live only for the duration of one `search`
//! call (see [`crate::posting::ListCursor`]), so this function never leaves
//! mutable state behind on the index it reads.

use crate::index::Index;
use crate::posting::ListCursor;
use crate::scoring::{Scorer, TermStats};
use crate::DocId;

/// One scored document, in external (slug, score) form.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub slug: String,
    pub score: f64,
}

struct QueryTerm<'a> {
    qf: u32,
    cf: u64,
    nd: u64,
    cursor: ListCursor<'a>,
}

/// Runs the DAAT merge over `query_terms` (already tokenized, stopped,
/// stemmed, and deduplicated into term/query-frequency pairs) and returns
/// hits ranked by descending score, ties broken by ascending `doc_id`.
///
/// Callers must not invoke this on an empty index: `avdl` divides by `nc`,
/// which is undefined at zero. [`crate::SearchEngine::search`] short-circuits
/// before reaching here in that case.
pub fn daat_search(index: &Index, query_terms: &[(String, u32)], scorer: &dyn Scorer) -> Vec<SearchHit> {
    let nc = index.num_docs() as u64;
    let dc = index.total_postings();

    let mut terms: Vec<QueryTerm<'_>> = query_terms
        .iter()
        .filter_map(|(term, qf)| {
            let list = index.inverted_list(term)?;
            Some(QueryTerm {
                qf: *qf,
                cf: list.collection_frequency() as u64,
                nd: list.document_frequency() as u64,
                cursor: list.cursor(),
            })
        })
        .collect();

    let mut scored: Vec<(DocId, f64)> = Vec::new();

    loop {
        let Some(current) = terms
            .iter()
            .filter(|t| !t.cursor.is_finished())
            .filter_map(|t| t.cursor.current_doc_id())
            .min()
        else {
            break;
        };

        let dl = index
            .doc_record(current)
            .map_or(0, |record| record.num_terms);

        let mut score = 0.0;
        for term in &terms {
            let df = if term.cursor.current_doc_id() == Some(current) {
                term.cursor.current_term_frequency() as u32
            } else {
                0
            };
            let stats = TermStats {
                qf: term.qf,
                df,
                cf: term.cf,
                nd: term.nd,
                nc,
                dl,
                dc,
            };
            score += scorer.contribution(&stats);
        }
        scored.push((current, score));

        for term in &mut terms {
            let next = DocId::new(current.as_u32() + 1);
            term.cursor.advance_to(next);
        }
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    scored
        .into_iter()
        .filter_map(|(doc_id, score)| {
            index
                .doc_record(doc_id)
                .map(|record| SearchHit {
                    slug: record.slug.clone(),
                    score,
                })
        })
        .collect()
}
