//! Examples of using the alphanumeric trie
use std::sync::{Arc, RwLock};
use std::thread;

use alphanumeric_trie::{AlphanumericTrie, Diagnostic, TrieOptions};

fn main() {
    // Create a new trie and add some tokens
    let mut trie = AlphanumericTrie::new();
    trie.add("hello", 1);
    trie.add("world", 2);

    assert_eq!(trie.get("hello"), Some(&1));
    assert_eq!(trie.get("world"), Some(&2));
    assert_eq!(trie.get("missing"), None);

    // Keys are lowercased and stripped on the way in, but not on lookup
    trie.add("User_42", 3);
    assert_eq!(trie.get("user42"), Some(&3));
    assert_eq!(trie.get("User_42"), None);

    println!(
        "{} keys, {} characters, {} nodes",
        trie.total_added_words(),
        trie.total_added_chars(),
        trie.node_count()
    );

    // A verbose trie reports what it skipped; here to stdout instead of stderr
    let mut verbose = AlphanumericTrie::with_sink(TrieOptions::new().verbose(true), |d: &Diagnostic<'_>| {
        println!("diagnostic: {}", d)
    })
    .expect("default width fits the alphabet");
    verbose.add("alex$", 5);
    verbose.add("alex", 10);

    // Readers can share a trie behind a lock; writers take it exclusively
    let shared = Arc::new(RwLock::new(trie));
    shared.write().unwrap().add("token7", 7);

    let handles: Vec<_> = ["hello", "token7", "absent"]
        .iter()
        .map(|&key| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || (key, shared.read().unwrap().has(key)))
        })
        .collect();

    for handle in handles {
        let (key, found) = handle.join().unwrap();
        println!("{}: {}", key, found);
    }
}
