//! The public entry point: [`SearchEngine`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::index::{DocRecord, Index};
use crate::pipeline::stems;
use crate::search::{daat_search, SearchHit};
use crate::{persistence, DocId};

/// An embeddable full-text index: ingest documents with [`index_text`],
/// query them with [`search`], and persist to a single JSON file.
///
/// [`index_text`]: SearchEngine::index_text
/// [`search`]: SearchEngine::search
pub struct SearchEngine {
    filepath: PathBuf,
    config: EngineConfig,
    index: Index,
    num_docs: u64,
    num_terms: u64,
}

impl SearchEngine {
    /// Opens (or creates) an engine backed by `filepath`, which must end in
    /// `.json`. If no file exists there yet, the engine starts empty; the
    /// first [`commit`](Self::commit) creates it.
    pub fn open(filepath: impl Into<PathBuf>, config: EngineConfig) -> Result<Self> {
        let filepath = filepath.into();
        if filepath.extension().and_then(|ext| ext.to_str()) != Some("json") {
            return Err(EngineError::InvalidArgument(format!(
                "filepath {} must end in .json",
                filepath.display()
            )));
        }

        let index = persistence::load(&filepath)?;
        let num_docs = index.num_docs() as u64;
        let num_terms = index.total_postings();
        debug!(path = %filepath.display(), num_docs, num_terms, "loaded index");

        Ok(Self {
            filepath,
            config,
            index,
            num_docs,
            num_terms,
        })
    }

    #[must_use]
    pub fn num_docs(&self) -> u64 {
        self.num_docs
    }

    #[must_use]
    pub fn num_terms(&self) -> u64 {
        self.num_terms
    }

    /// Tokenizes, stops, and stems `text`, recording one posting per
    /// emitted stem under a freshly assigned `doc_id`, then records
    /// `doc_table[doc_id] = {slug, num_terms}`.
    ///
    /// Tokens are buffered in memory for this one document before being
    /// committed into the shared index, so a panic partway through
    /// tokenizing one document cannot leave a half-indexed document behind
    /// in `self.index`.
    pub fn index_text(&mut self, text: &str, slug: impl Into<String>) {
        let slug = slug.into();
        let doc_id = DocId::new(self.num_docs as u32 + 1);

        let postings: Vec<(String, u32)> = stems(text, self.config.stopper.as_ref(), self.config.stemmer.as_ref())
            .enumerate()
            .map(|(position, stem)| (stem, position as u32))
            .collect();
        let num_terms = postings.len() as u64;

        for (term, position) in postings {
            self.index.add_posting(&term, doc_id, position);
        }
        self.index.insert_doc_record(
            doc_id,
            DocRecord {
                slug: slug.clone(),
                num_terms,
            },
        );

        self.num_docs += 1;
        self.num_terms += num_terms;
        debug_assert_eq!(self.index.num_docs() as u64, self.num_docs);
        debug_assert_eq!(self.index.total_postings(), self.num_terms);

        info!(doc_id = %doc_id, slug, num_terms, "indexed document");
    }

    /// Reads `path` as text under `encoding` (`None` or `Some("utf-8")`;
    /// anything else is rejected) and delegates to
    /// [`index_text`](Self::index_text). No partial document is indexed if
    /// the read fails.
    ///
    /// Only UTF-8 is actually supported: no transcoding crate is in this
    /// engine's dependency stack, so any other named encoding is an
    /// `InvalidArgument` rather than a silent UTF-8 fallback.
    pub fn index_file(
        &mut self,
        path: impl AsRef<Path>,
        slug: impl Into<String>,
        encoding: Option<&str>,
    ) -> Result<()> {
        match encoding {
            None | Some("utf-8") | Some("UTF-8") => {}
            Some(other) => {
                return Err(EngineError::InvalidArgument(format!(
                    "unsupported encoding {other:?}: only utf-8 is supported"
                )))
            }
        }

        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        self.index_text(&text, slug);
        Ok(())
    }

    /// Tokenizes `query` the same way documents are indexed, merges the
    /// resulting terms' posting lists document-at-a-time, and returns hits
    /// ranked by descending score (ties broken by ascending `doc_id`).
    ///
    /// An empty index has no well-defined average document length, which
    /// BM25's `K` divides by; rather than push that guard into every
    /// scorer, `search` short-circuits here.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if self.num_docs == 0 {
            return Vec::new();
        }

        let mut query_frequencies: HashMap<String, u32> = HashMap::new();
        for stem in stems(query, self.config.stopper.as_ref(), self.config.stemmer.as_ref()) {
            *query_frequencies.entry(stem).or_insert(0) += 1;
        }
        let query_terms: Vec<(String, u32)> = query_frequencies.into_iter().collect();

        let hits = daat_search(&self.index, &query_terms, self.config.scorer.as_ref());
        info!(query, num_hits = hits.len(), "search complete");
        hits
    }

    /// Resets in-memory state to empty. Does not touch disk; a subsequent
    /// [`commit`](Self::commit) is what makes the reset durable.
    pub fn clear_all_data(&mut self) {
        self.index.clear();
        self.num_docs = 0;
        self.num_terms = 0;
        warn!(path = %self.filepath.display(), "cleared all in-memory index data");
    }

    /// Writes the entire engine state to `filepath`, write-then-rename.
    pub fn commit(&self) -> Result<()> {
        persistence::save(&self.filepath, &self.index)?;
        info!(path = %self.filepath.display(), num_docs = self.num_docs, "committed index");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_json_filepath() {
        let err = SearchEngine::open("/tmp/ferret-index.txt", EngineConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn opening_a_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        assert_eq!(engine.num_docs(), 0);
        assert_eq!(engine.num_terms(), 0);
    }

    #[test]
    fn index_then_search_finds_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let mut engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        engine.index_text("the quick brown fox", "fox-doc");
        let hits = engine.search("fox");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "fox-doc");
    }

    #[test]
    fn search_on_empty_index_returns_no_hits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        assert!(engine.search("anything").is_empty());
    }

    #[test]
    fn result_scores_are_non_increasing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let mut engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        engine.index_text("the fox ran past the fox and the fox hid", "heavy-fox");
        engine.index_text("a fox appeared once", "light-fox");
        engine.index_text("no mention of that animal at all", "unrelated");

        let hits = engine.search("fox");
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn unknown_query_term_does_not_change_ranking_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let mut engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        engine.index_text("the fox ran past the fox and the fox hid", "heavy-fox");
        engine.index_text("a fox appeared once", "light-fox");

        let with_unknown = engine.search("fox zzzznotindexedzzzz");
        let without_unknown = engine.search("fox");
        let slugs_with: Vec<_> = with_unknown.iter().map(|h| h.slug.clone()).collect();
        let slugs_without: Vec<_> = without_unknown.iter().map(|h| h.slug.clone()).collect();
        assert_eq!(slugs_with, slugs_without);
    }

    #[test]
    fn commit_then_reopen_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let mut engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        engine.index_text("the quick brown fox", "fox-doc");
        engine.commit().unwrap();

        let reopened = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        assert_eq!(reopened.num_docs(), 1);
        assert_eq!(reopened.num_terms(), engine.num_terms());
        assert_eq!(reopened.search("fox")[0].slug, "fox-doc");
    }

    #[test]
    fn index_file_rejects_unsupported_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let doc_path = dir.path().join("doc.txt");
        std::fs::write(&doc_path, "the quick brown fox").unwrap();

        let mut engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        let err = engine
            .index_file(&doc_path, "fox-doc", Some("latin-1"))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
        assert_eq!(engine.num_docs(), 0);
    }

    #[test]
    fn index_file_defaults_to_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        let doc_path = dir.path().join("doc.txt");
        std::fs::write(&doc_path, "the quick brown fox").unwrap();

        let mut engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        engine.index_file(&doc_path, "fox-doc", None).unwrap();
        assert_eq!(engine.num_docs(), 1);
    }

    #[test]
    fn clear_all_data_resets_without_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let mut engine = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        engine.index_text("the quick brown fox", "fox-doc");
        engine.commit().unwrap();
        engine.clear_all_data();
        assert_eq!(engine.num_docs(), 0);

        let reopened = SearchEngine::open(&path, EngineConfig::default()).unwrap();
        assert_eq!(reopened.num_docs(), 1, "commit before clear must survive on disk");
    }
}
