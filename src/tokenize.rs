//! Splitting raw text into tokens.
//!
//! A token is a maximal run of ASCII alphanumerics; everything else is a
//! separator and is discarded. `Tokens` is a genuine pull-based iterator —
//! it holds a `Peekable` char iterator over the input and advances it one
//! token at a time, so indexing a large document never requires collecting
//! tokens into a `Vec` up front.
//!
//! Non-ASCII characters are treated as separators. The source this is
//! ported from does the same (its range checks are `'a'..='z'`,
//! `'A'..='Z'`, `'0'..='9'`), so this is not a loosening of behavior.

use std::iter::Peekable;
use std::str::CharIndices;

/// Lazily tokenizes a string into lowercase alphanumeric runs.
pub struct Tokens<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }
}

#[inline]
fn is_tokenizable(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

impl<'a> Iterator for Tokens<'a> {
    /// Owned because tokens are lowercased, which may not match the
    /// original byte slice.
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // Skip separators.
        while let Some(&(_, c)) = self.chars.peek() {
            if is_tokenizable(c) {
                break;
            }
            self.chars.next();
        }

        let (start, _) = *self.chars.peek()?;
        let mut end = start;
        while let Some(&(idx, c)) = self.chars.peek() {
            if !is_tokenizable(c) {
                break;
            }
            end = idx + c.len_utf8();
            self.chars.next();
        }

        Some(self.text[start..end].to_ascii_lowercase())
    }
}
