//! Bundling the engine's optional collaborators behind a small builder.
//!
//! A `SearchEngine::open(path, tokenizer?, stopper?, stemmer?, scorer?)`
//! constructor reads fine in the spec's prose but turns into an awkward
//! five-argument call at every call site once three of the five are
//! usually defaults. `EngineConfig` collects them instead.

use std::sync::Arc;

use crate::scoring::{QlScorer, Scorer};
use crate::stem::{PorterStemmer, Stemmer};
use crate::stopper::{NullStopper, Stopper};

/// The pluggable collaborators a [`crate::SearchEngine`] is built with.
///
/// Defaults: no stopper, the Porter Step-1 stemmer, and Query Likelihood
/// scoring — QL is the safer default of the two scorers since it degrades
/// to a `0` contribution rather than dividing by zero on a thin corpus.
#[derive(Clone)]
pub struct EngineConfig {
    pub(crate) stopper: Arc<dyn Stopper>,
    pub(crate) stemmer: Arc<dyn Stemmer>,
    pub(crate) scorer: Arc<dyn Scorer>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stopper: Arc::new(NullStopper),
            stemmer: Arc::new(PorterStemmer),
            scorer: Arc::new(QlScorer),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Builds an [`EngineConfig`], overriding only the collaborators a caller
/// cares about.
#[derive(Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    #[must_use]
    pub fn stopper(mut self, stopper: impl Stopper + 'static) -> Self {
        self.config.stopper = Arc::new(stopper);
        self
    }

    #[must_use]
    pub fn stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.config.stemmer = Arc::new(stemmer);
        self
    }

    #[must_use]
    pub fn scorer(mut self, scorer: impl Scorer + 'static) -> Self {
        self.config.scorer = Arc::new(scorer);
        self
    }

    #[must_use]
    pub fn build(self) -> EngineConfig {
        self.config
    }
}
