//! # Alphanumeric Trie
//!
//! A prefix tree specialised for short tokens over `[a-z0-9]`.
//!
//! Each node holds a fixed array of 36 child slots (26 letters followed by 10
//! digits), so walking a key costs one array index per character with no
//! hashing or searching. The structure only grows: there is no removal.
//!
//! ## Key handling
//!
//! - **Insertion folds and strips**: `add` lowercases ASCII letters and skips
//!   any character outside the alphabet.
//! - **Lookup is exact**: `get` and `has` use the key as given. Uppercase or
//!   punctuation in a lookup key never matches, so callers that want
//!   case-insensitive lookups lowercase first.
//! - **Diagnostics are opt-in**: a verbose trie reports skipped characters and
//!   overwritten keys to a [`DiagnosticSink`].
//!
//! ## Example
//!
//! ```rust
//! use alphanumeric_trie::AlphanumericTrie;
//!
//! let mut trie = AlphanumericTrie::new();
//! trie.add("hello", 1);
//! trie.add("World42", 2);
//!
//! assert_eq!(trie.get("hello"), Some(&1));
//! assert_eq!(trie.get("world42"), Some(&2));
//! assert_eq!(trie.total_added_words(), 2);
//! assert_eq!(trie.total_added_chars(), 12);
//! ```

pub mod alphabet;
pub mod diagnostics;
mod node;
mod options;
mod trie;

// Re-export public types
pub use crate::alphabet::ALPHABET_SIZE;
pub use crate::diagnostics::{Diagnostic, DiagnosticSink, StderrSink};
pub use crate::options::TrieOptions;
pub use crate::trie::AlphanumericTrie;

/// Errors that can occur when building a trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Nodes would be too narrow to hold every alphabet symbol
    InvalidSlotCount {
        /// The width that was asked for
        requested: usize,
        /// The smallest width that fits the alphabet
        minimum: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSlotCount { requested, minimum } => write!(
                f,
                "{} slots per node requested, at least {} are needed",
                requested, minimum
            ),
        }
    }
}

impl std::error::Error for Error {}
