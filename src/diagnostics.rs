//! Warnings emitted by a verbose trie.
//!
//! A trie built with `verbose` reports skipped characters and overwritten keys
//! to a [`DiagnosticSink`]. The default sink prints to standard error. Any
//! closure taking a `&Diagnostic` can be used instead, for example to collect
//! warnings in tests or forward them to an application logger.

use std::fmt;

/// A non-fatal event noticed while adding or looking up a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic<'a> {
    /// `character` of `key` has no slot in the alphabet and was skipped.
    InvalidCharacter {
        /// The offending character
        character: char,
        /// The key as passed by the caller
        key: &'a str,
    },
    /// `key` resolved to a node that already held a value.
    Overwrite {
        /// The key as passed by the caller
        key: &'a str,
    },
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidCharacter { character, key } => {
                write!(f, "Invalid character [{}] of key string [{}]", character, key)
            }
            Diagnostic::Overwrite { key } => {
                write!(f, "Key [{}] already exists in the trie. Overwriting value.", key)
            }
        }
    }
}

/// Receives diagnostics from a verbose trie.
pub trait DiagnosticSink {
    /// Handles a single diagnostic.
    fn warn(&self, diagnostic: &Diagnostic<'_>);
}

/// Writes each diagnostic to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&self, diagnostic: &Diagnostic<'_>) {
        eprintln!("warning: {}", diagnostic);
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic<'_>),
{
    fn warn(&self, diagnostic: &Diagnostic<'_>) {
        self(diagnostic)
    }
}
