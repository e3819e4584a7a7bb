//! The on-disk JSON codec.
//!
//! The wire schema is intentionally verbose and human-inspectable rather
//! than compact: a `doc_data` map keyed by decimal-string `doc_id`, and an
//! `index` array of per-term posting lists. Derived counters (`num_docs`,
//! `num_terms`, per-list document/collection frequency) are never trusted
//! from the file — they're recomputed from what's actually loaded.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::index::{DocRecord, Index};
use crate::DocId;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireState {
    doc_data: BTreeMap<String, WireDocInfo>,
    index: Vec<WireInvertedList>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireDocInfo {
    slug: String,
    num_terms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireInvertedList {
    term: String,
    posting_list: Vec<WirePostingGroup>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePostingGroup {
    doc_id: u32,
    postings: Vec<u32>,
}

/// Loads an [`Index`] from `path`. A missing file is not an error — it
/// yields an empty index, matching the engine's "no artifact yet" startup
/// state.
pub fn load(path: &Path) -> Result<Index> {
    let mut index = Index::new();

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(index),
        Err(e) => return Err(EngineError::io(path, e)),
    };

    let wire: WireState = serde_json::from_str(&contents)
        .map_err(|e| EngineError::malformed(path, e.to_string()))?;

    for (doc_id_str, info) in wire.doc_data {
        let doc_id: u32 = doc_id_str
            .parse()
            .map_err(|_| EngineError::malformed(path, format!("non-numeric doc_id key {doc_id_str:?}")))?;
        index.insert_doc_record(
            DocId::new(doc_id),
            DocRecord {
                slug: info.slug,
                num_terms: info.num_terms,
            },
        );
    }

    for wire_list in wire.index {
        for group in wire_list.posting_list {
            for &position in &group.postings {
                index.add_posting(&wire_list.term, DocId::new(group.doc_id), position);
            }
        }
    }

    Ok(index)
}

/// Writes `index` to `path`, write-then-rename: the new content lands in a
/// sibling temp file first, then an atomic rename replaces `path`, so a
/// crash mid-write never leaves a torn file behind.
pub fn save(path: &Path, index: &Index) -> Result<()> {
    let doc_data = index
        .doc_records()
        .map(|(doc_id, record)| {
            (
                doc_id.to_string(),
                WireDocInfo {
                    slug: record.slug.clone(),
                    num_terms: record.num_terms,
                },
            )
        })
        .collect();

    let wire_index = index
        .terms()
        .map(|(term, list)| WireInvertedList {
            term: term.to_string(),
            posting_list: list
                .groups()
                .iter()
                .map(|group| WirePostingGroup {
                    doc_id: group.doc_id.as_u32(),
                    postings: group.positions.clone(),
                })
                .collect(),
        })
        .collect();

    let wire = WireState {
        doc_data,
        index: wire_index,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| EngineError::io(path, e))?;
    let json = serde_json::to_string_pretty(&wire)
        .map_err(|e| EngineError::malformed(path, e.to_string()))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| EngineError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| EngineError::io(path, e.error))?;

    Ok(())
}
