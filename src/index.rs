//! The in-memory index: a term-to-postings map plus the document table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::posting::InvertedList;
use crate::DocId;

/// Everything the engine knows about one indexed document besides its
/// postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    /// The caller-supplied external name returned in search results. Opaque
    /// to the engine: no uniqueness is enforced.
    pub slug: String,
    /// The number of post-stemming tokens emitted for this document, in
    /// ingestion order. Used as `dl` in scoring.
    pub num_terms: u64,
}

/// The term-to-postings map and the document table it's built over.
///
/// A `BTreeMap` keyes the term table so persistence writes terms in a
/// stable order, which keeps the on-disk artifact's diffs meaningful across
/// commits of the same corpus.
#[derive(Debug, Clone, Default)]
pub struct Index {
    terms: BTreeMap<String, InvertedList>,
    doc_table: BTreeMap<DocId, DocRecord>,
}

impl Index {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `term` at `position` in `doc_id`, creating
    /// the term's inverted list if this is its first occurrence.
    pub fn add_posting(&mut self, term: &str, doc_id: DocId, position: u32) {
        self.terms
            .entry(term.to_string())
            .or_default()
            .add_posting(doc_id, position);
    }

    pub fn insert_doc_record(&mut self, doc_id: DocId, record: DocRecord) {
        self.doc_table.insert(doc_id, record);
    }

    #[must_use]
    pub fn inverted_list(&self, term: &str) -> Option<&InvertedList> {
        self.terms.get(term)
    }

    #[must_use]
    pub fn doc_record(&self, doc_id: DocId) -> Option<&DocRecord> {
        self.doc_table.get(&doc_id)
    }

    #[must_use]
    pub fn num_docs(&self) -> usize {
        self.doc_table.len()
    }

    /// The total number of postings across every term's inverted list.
    /// Equal to `Σ doc.num_terms` over the document table — an invariant
    /// the engine asserts in debug builds after every mutation.
    #[must_use]
    pub fn total_postings(&self) -> u64 {
        self.terms
            .values()
            .map(|list| list.collection_frequency() as u64)
            .sum()
    }

    #[must_use]
    pub fn terms(&self) -> impl Iterator<Item = (&str, &InvertedList)> {
        self.terms.iter().map(|(t, l)| (t.as_str(), l))
    }

    #[must_use]
    pub fn doc_records(&self) -> impl Iterator<Item = (DocId, &DocRecord)> {
        self.doc_table.iter().map(|(&id, r)| (id, r))
    }

    pub fn clear(&mut self) {
        self.terms.clear();
        self.doc_table.clear();
    }
}
