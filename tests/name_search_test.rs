// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Integration tests for the search core.
//! Exercises the public API the way the web layer drives it: users are
//! indexed as they are created, suggestions are served from published
//! snapshots, and free text is analyzed before ranking.

use std::collections::BTreeSet;
use std::sync::{Arc, Barrier};
use std::thread;

use kilo_search_lib::analysis::{ngram_tokenizer, sanitize, sanitize_opt};
use kilo_search_lib::config::index::IndexConfig;
use kilo_search_lib::data_structures::{NameIndex, NameTrie, TrieChild, UserName};

fn set_of(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_prefix_search_exactness() {
    let mut trie = NameTrie::new();
    trie.insert("Anna", "Anna Anderson");
    trie.insert("Anderson", "Anna Anderson");

    assert_eq!(trie.search_by_prefix("An"), set_of(&["Anna Anderson"]));
    assert_eq!(trie.search_by_prefix("Xy"), BTreeSet::new());

    for prefix in ["an", "AN", "An"] {
        assert_eq!(trie.search_by_prefix(prefix), set_of(&["Anna Anderson"]));
    }
}

#[test]
fn test_fragment_sharing_and_case_preservation() {
    let mut trie = NameTrie::new();
    trie.insert("john", "John Smith");
    trie.insert("JOHN", "John Doe");

    let names: Vec<String> = trie.search_by_prefix("Jo").into_iter().collect();
    assert_eq!(names, vec!["John Doe", "John Smith"]);
}

#[test]
fn test_walking_matches_from_the_root() {
    let mut trie = NameTrie::new();
    trie.insert("Al", "Al Green");

    // A caller can walk the trie itself through the tagged children
    let mut node = trie.root();
    for key in ['A', 'L'] {
        node = node
            .children()
            .find_map(|child| match child {
                TrieChild::Fragment(c, next) if c == key => Some(next),
                _ => None,
            })
            .expect("fragment path exists");
    }

    assert!(node.is_name_end());
    let leaves: Vec<&str> = node
        .children()
        .filter_map(|child| match child {
            TrieChild::NameLeaf(name) => Some(name),
            TrieChild::Fragment(..) => None,
        })
        .collect();
    assert_eq!(leaves, vec!["Al Green"]);
}

#[test]
fn test_index_serves_readers_while_rebuilding() {
    const READERS: usize = 4;

    let index = Arc::new(NameIndex::new(IndexConfig { max_suggestions: 5 }));
    index.rebuild([UserName::new("Ada", "Lovelace")]);

    let barrier = Arc::new(Barrier::new(READERS + 1));
    let handles: Vec<_> = (0..READERS)
        .map(|_| {
            let index = Arc::clone(&index);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..100 {
                    let snapshot = index.snapshot();
                    let found = snapshot.search_by_prefix("a");
                    assert!(!found.is_empty());
                    assert!(found.len() <= 2);
                }
            })
        })
        .collect();

    barrier.wait();
    for _ in 0..20 {
        index.rebuild([
            UserName::new("Ada", "Lovelace"),
            UserName::new("Alan", "Turing"),
        ]);
    }

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(index.suggest("a"), vec!["Ada Lovelace", "Alan Turing"]);
}

#[test]
fn test_text_analysis_pipeline() {
    assert_eq!(sanitize("Don't you dare!!"), "don't you dare");
    assert_eq!(sanitize("D.on't you 2 dare!,!"), "don't you 2 dare");
    assert_eq!(sanitize_opt(None), None);

    let grams = ngram_tokenizer("how about them how");
    let expected: [(&str, usize); 8] = [
        ("how", 2),
        ("about", 1),
        ("them", 1),
        ("how about", 1),
        ("about them", 1),
        ("them how", 1),
        ("how about them", 1),
        ("about them how", 1),
    ];
    assert_eq!(grams.iter().collect::<Vec<_>>(), expected.to_vec());

    let grams = ngram_tokenizer("No not no Not");
    assert_eq!(grams.get("no"), Some(2));
    assert_eq!(grams.get("not"), Some(2));
    assert_eq!(grams.get("no not"), Some(2));
    assert_eq!(grams.get("not no"), Some(1));
    assert_eq!(grams.get("no not no"), Some(1));
    assert_eq!(grams.get("not no not"), Some(1));
    assert_eq!(grams.len(), 6);

    assert!(ngram_tokenizer("").is_empty());
}
