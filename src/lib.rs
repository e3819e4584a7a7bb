//! Embeddable full-text search.
//!
//! A document-at-a-time retrieval engine over a positional inverted index:
//! tokenize, optionally stop, stem, and accumulate per-document scores
//! under a pluggable scoring model (BM25 or Query Likelihood).
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌─────────┐   ┌────────┐
//! │ tokenize.rs│──▶│stopper.rs│──▶│ stem.rs│   pipeline.rs composes these
//! └────────────┘   └─────────┘   └────────┘   into one lazy stem iterator
//!                                                     │
//!                                                     ▼
//! ┌───────────┐    ┌───────┐    ┌──────────┐   ┌─────────────┐
//! │persistence│◀──▶│index.rs│◀──│posting.rs│◀──│  engine.rs  │
//! └───────────┘    └───────┘    └──────────┘   └─────────────┘
//!                        ▲                             │
//!                        │                              ▼
//!                  ┌───────────┐                  ┌──────────┐
//!                  │scoring/   │◀─────────────────│ search.rs│
//!                  └───────────┘                  └──────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use ferret::{EngineConfig, SearchEngine};
//!
//! let mut engine = SearchEngine::open("index.json", EngineConfig::default())?;
//! engine.index_text("the quick brown fox jumps over the lazy dog", "fox-doc");
//! engine.commit()?;
//!
//! for hit in engine.search("fox dog") {
//!     println!("{}: {}", hit.slug, hit.score);
//! }
//! # Ok::<(), ferret::EngineError>(())
//! ```

mod config;
mod engine;
mod error;
mod index;
mod persistence;
mod pipeline;
mod posting;
mod scoring;
mod search;
mod stem;
mod stopper;
mod tokenize;
mod types;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::SearchEngine;
pub use error::{EngineError, Result};
pub use posting::{InvertedList, ListCursor, PostingGroup};
pub use scoring::{Bm25Scorer, QlScorer, Scorer, TermStats};
pub use search::SearchHit;
pub use stem::{PorterStemmer, Stemmer};
pub use stopper::{NullStopper, SetStopper, Stopper};
pub use tokenize::Tokens;
pub use types::DocId;
