//! Type-safe identifiers.
//!
//! A bare `u32` document id is easy to transpose with a term frequency or a
//! position in a function signature. `DocId` exists so the compiler catches
//! that instead of a test run.

/// A document's identifier within one [`crate::SearchEngine`] instance.
///
/// Assigned sequentially by the engine as documents are indexed; never
/// reused, even after [`crate::SearchEngine::clear_all_data`] resets the
/// index, until the next load from a persisted file re-derives it from
/// that file's own assignments.
///
/// Not `Serialize`/`Deserialize`: the wire format keys documents by plain
/// `u32`/`String`, converted explicitly at the persistence boundary, so
/// there is no wire struct that ever holds a `DocId` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DocId(u32);

impl DocId {
    #[inline]
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
