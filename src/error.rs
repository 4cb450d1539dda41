//! Errors reported by [`Dictionary`][crate::dictionary::Dictionary] operations.
//!
//! A missing key is never an error: lookups return `None` and removals return
//! `false`. Only misuse of the API is reported here.

/// The ways a dictionary operation can be rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryError {
    /// The key passed to the operation is absent (see [`Key::is_absent`][crate::key::Key::is_absent]).
    #[error("key must not be absent")]
    InvalidKey,
    /// `add` was called with a key that is already stored. The dictionary is left as it was.
    #[error("an entry with the same key already exists")]
    DuplicateKey,
}
