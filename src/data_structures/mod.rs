//! Data structures for Kilo Search.
//!
//! This module contains the in-memory search structures. They perform no
//! I/O and no internal locking; sharing between threads goes through
//! immutable snapshots.

pub mod name_trie;

// Re-export common data structures
pub use name_trie::{NameIndex, NameTrie, TrieChild, TrieNode, UserName};
