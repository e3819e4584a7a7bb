//! Composing the tokenizer, stopper, and stemmer into one lazy pipeline.
//!
//! The source this is derived from chains three generators (tokenize, stop,
//! stem); the equivalent here is a single iterator adapter chain over
//! [`Tokens`], filtering stopwords and stemming what's left, with no
//! intermediate `Vec` at any stage.

use crate::stem::Stemmer;
use crate::stopper::Stopper;
use crate::tokenize::Tokens;

/// Runs `text` through tokenization, stopword filtering, and stemming,
/// yielding the resulting stems lazily.
pub fn stems<'a>(
    text: &'a str,
    stopper: &'a dyn Stopper,
    stemmer: &'a dyn Stemmer,
) -> impl Iterator<Item = String> + 'a {
    Tokens::new(text)
        .filter(move |token| !stopper.is_stopword(token))
        .map(move |token| stemmer.stem(&token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::PorterStemmer;
    use crate::stopper::{NullStopper, SetStopper};

    #[test]
    fn stops_before_stemming() {
        // "running" would stem to "run"; if it were stemmed before the
        // stopword check, a stopword list containing "run" (not "running")
        // would fail to catch it. Order here is fixed: stop, then stem.
        let stopper = SetStopper::new(["running".to_string()]);
        let stemmer = PorterStemmer;
        let out: Vec<_> = stems("running and jumping", &stopper, &stemmer).collect();
        assert_eq!(out, vec!["jump"]);
    }

    #[test]
    fn null_stopper_passes_everything_through_to_the_stemmer() {
        let stopper = NullStopper;
        let stemmer = PorterStemmer;
        let out: Vec<_> = stems("the cats sat", &stopper, &stemmer).collect();
        assert_eq!(out, vec!["the", "cat", "sat"]);
    }
}
