//! Construction-time configuration.

use crate::alphabet::ALPHABET_SIZE;
use crate::Error;

/// Options accepted by [`AlphanumericTrie::with_options`].
///
/// ```
/// use alphanumeric_trie::TrieOptions;
///
/// let options = TrieOptions::default().verbose(true);
/// assert!(options.is_verbose());
/// assert_eq!(options.width(), 36);
/// ```
///
/// [`AlphanumericTrie::with_options`]: crate::AlphanumericTrie::with_options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieOptions {
    verbose: bool,
    slots_per_node: usize,
}

impl TrieOptions {
    /// Default options: quiet, one slot per alphabet symbol.
    pub const fn new() -> Self {
        TrieOptions {
            verbose: false,
            slots_per_node: ALPHABET_SIZE,
        }
    }

    /// Emit diagnostics for skipped characters and overwritten keys.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Width of every node's slot array.
    pub fn slots_per_node(mut self, slots_per_node: usize) -> Self {
        self.slots_per_node = slots_per_node;
        self
    }

    /// Whether diagnostics are enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Configured slot array width
    pub fn width(&self) -> usize {
        self.slots_per_node
    }

    /// Checks that every alphabet symbol fits in a node.
    pub fn validate(&self) -> Result<(), Error> {
        if self.slots_per_node < ALPHABET_SIZE {
            return Err(Error::InvalidSlotCount {
                requested: self.slots_per_node,
                minimum: ALPHABET_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for TrieOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TrieOptions::default();
        assert!(!options.is_verbose());
        assert_eq!(options.width(), ALPHABET_SIZE);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn test_setters_chain() {
        let options = TrieOptions::new().verbose(true).slots_per_node(64);
        assert!(options.is_verbose());
        assert_eq!(options.width(), 64);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn test_too_narrow_is_rejected() {
        let err = TrieOptions::new().slots_per_node(26).validate().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidSlotCount {
                requested: 26,
                minimum: 36
            }
        );
    }
}
