//! The main trie implementation.
//!
//! This module contains the `AlphanumericTrie` type, which maps case-folded
//! alphanumeric keys to values using fixed-width nodes.

use std::fmt;

use crate::alphabet::slot_index;
use crate::diagnostics::{Diagnostic, DiagnosticSink, StderrSink};
use crate::node::TrieNode;
use crate::options::TrieOptions;
use crate::Error;

/// A trie keyed by strings over `[a-z0-9]`.
///
/// Every node holds one slot per alphabet symbol, so each step of a lookup is
/// a single array index. Keys are lowercased on insertion and characters
/// outside the alphabet are dropped, so `"Foo-1"` is stored as `"foo1"`.
/// Lookups do **not** fold or strip: `get` walks the raw key, and any
/// character without a slot (an uppercase letter, punctuation) makes the key
/// unmatchable.
///
/// Diagnostics go to `S`, which is only consulted when the trie is verbose.
pub struct AlphanumericTrie<T, S = StderrSink> {
    /// Root node, standing for the empty key
    root: TrieNode<T>,

    /// Width of every node's slot array
    slots_per_node: usize,

    verbose: bool,

    /// Accepted characters over all insertions
    total_added_chars: usize,

    /// Number of terminal nodes
    total_added_words: usize,

    sink: S,
}

impl<T> AlphanumericTrie<T> {
    /// Creates an empty, quiet trie with one slot per alphabet symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphanumeric_trie::AlphanumericTrie;
    ///
    /// let trie = AlphanumericTrie::<u32>::new();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.slots_per_node(), 36);
    /// ```
    pub fn new() -> Self {
        Self::build(TrieOptions::new(), StderrSink)
    }

    /// Creates an empty trie that reports diagnostics to standard error.
    ///
    /// Fails if `options` asks for fewer slots than the alphabet has symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphanumeric_trie::{AlphanumericTrie, TrieOptions};
    ///
    /// let trie = AlphanumericTrie::<u32>::with_options(TrieOptions::new().verbose(true)).unwrap();
    /// assert!(trie.is_verbose());
    ///
    /// assert!(AlphanumericTrie::<u32>::with_options(TrieOptions::new().slots_per_node(10)).is_err());
    /// ```
    pub fn with_options(options: TrieOptions) -> Result<Self, Error> {
        Self::with_sink(options, StderrSink)
    }
}

impl<T, S> AlphanumericTrie<T, S> {
    fn build(options: TrieOptions, sink: S) -> Self {
        AlphanumericTrie {
            root: TrieNode::new(options.width()),
            slots_per_node: options.width(),
            verbose: options.is_verbose(),
            total_added_chars: 0,
            total_added_words: 0,
            sink,
        }
    }

    /// Total number of accepted characters across every `add` call.
    ///
    /// Skipped characters are not counted; characters of a re-added key are.
    pub fn total_added_chars(&self) -> usize {
        self.total_added_chars
    }

    /// Number of distinct keys stored.
    pub fn total_added_words(&self) -> usize {
        self.total_added_words
    }

    /// Same as [`total_added_words`](Self::total_added_words).
    pub fn len(&self) -> usize {
        self.total_added_words
    }

    /// Returns `true` if no key has been added.
    pub fn is_empty(&self) -> bool {
        self.total_added_words == 0
    }

    /// Width of every node's slot array
    pub fn slots_per_node(&self) -> usize {
        self.slots_per_node
    }

    /// Whether diagnostics are emitted
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Number of allocated nodes, the root included.
    ///
    /// This walks the whole tree.
    pub fn node_count(&self) -> usize {
        self.root.subtree_nodes()
    }
}

impl<T, S: DiagnosticSink> AlphanumericTrie<T, S> {
    /// Creates an empty trie that reports diagnostics to `sink`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphanumeric_trie::{AlphanumericTrie, Diagnostic, TrieOptions};
    /// use std::cell::RefCell;
    ///
    /// let warnings = RefCell::new(Vec::new());
    /// let mut trie = AlphanumericTrie::with_sink(
    ///     TrieOptions::new().verbose(true),
    ///     |d: &Diagnostic<'_>| warnings.borrow_mut().push(d.to_string()),
    /// )
    /// .unwrap();
    ///
    /// trie.add("alex$", 5);
    /// drop(trie);
    /// assert_eq!(warnings.into_inner(), vec!["Invalid character [$] of key string [alex$]"]);
    /// ```
    pub fn with_sink(options: TrieOptions, sink: S) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self::build(options, sink))
    }

    /// Adds `value` under `key`, replacing any value the key already had.
    ///
    /// The key is lowercased and characters outside `[a-z0-9]` are skipped, so
    /// `"Alex$123"` and `"alex123"` name the same entry. A key with no valid
    /// characters is stored at the root, alongside the empty key.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphanumeric_trie::AlphanumericTrie;
    ///
    /// let mut trie = AlphanumericTrie::new();
    /// trie.add("ALLCAPS", 5);
    ///
    /// assert_eq!(trie.get("allcaps"), Some(&5));
    /// assert_eq!(trie.get("ALLCAPS"), None);
    /// ```
    pub fn add(&mut self, key: &str, value: T) {
        let verbose = self.verbose;
        let sink = &self.sink;
        let mut node = &mut self.root;

        for c in key.chars() {
            let slot = match slot_or_warn(c.to_ascii_lowercase(), c, key, verbose, sink) {
                Some(slot) => slot,
                None => continue,
            };
            self.total_added_chars += 1;
            node = node.child_or_insert(slot);
        }

        if node.is_terminal() {
            if verbose {
                sink.warn(&Diagnostic::Overwrite { key });
            }
            self.total_added_words -= 1;
        }

        self.total_added_words += 1;
        node.set_value(value);
    }

    /// Retrieves the value stored for `key`, if any.
    ///
    /// The key is matched exactly as given: no case folding and no stripping.
    /// Reaching a node that only lies on the path of a longer key is not a
    /// match.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphanumeric_trie::AlphanumericTrie;
    ///
    /// let mut trie = AlphanumericTrie::new();
    /// trie.add("hello", 42);
    ///
    /// assert_eq!(trie.get("hello"), Some(&42));
    /// assert_eq!(trie.get("hell"), None);
    /// assert_eq!(trie.get("world"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&T> {
        let mut node = &self.root;

        for c in key.chars() {
            let slot = slot_or_warn(c, c, key, self.verbose, &self.sink)?;
            node = node.child(slot)?;
        }

        node.value()
    }

    /// Returns `true` if `get(key)` would find a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphanumeric_trie::AlphanumericTrie;
    ///
    /// let mut trie = AlphanumericTrie::new();
    /// trie.add("alex$123", ());
    ///
    /// assert!(trie.has("alex123"));
    /// assert!(!trie.has("alex$123"));
    /// ```
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Maps `folded` to its slot, warning about `original` when it has none.
fn slot_or_warn<S: DiagnosticSink>(
    folded: char,
    original: char,
    key: &str,
    verbose: bool,
    sink: &S,
) -> Option<usize> {
    let slot = slot_index(folded);
    if slot.is_none() && verbose {
        sink.warn(&Diagnostic::InvalidCharacter {
            character: original,
            key,
        });
    }
    slot
}

impl<T> Default for AlphanumericTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> fmt::Debug for AlphanumericTrie<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphanumericTrie")
            .field("slots_per_node", &self.slots_per_node)
            .field("verbose", &self.verbose)
            .field("total_added_chars", &self.total_added_chars)
            .field("total_added_words", &self.total_added_words)
            .finish()
    }
}
