// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Name Trie Implementation
//!
//! This module provides a case-insensitive prefix tree over user name
//! fragments. Each first name and last name is inserted separately and
//! mapped to the user's full name, so a single lookup answers "which users
//! have a first or last name starting with X".
//!
//! Only the lookup key is case folded. Full names are stored exactly as
//! they were inserted, so results keep their display casing.
//!
//! # Example
//!
//! ```
//! use kilo_search_lib::data_structures::name_trie::NameTrie;
//!
//! let mut trie = NameTrie::new();
//! trie.insert("John", "John Smith");
//! trie.insert("Smith", "John Smith");
//! trie.insert("John", "John Doe");
//!
//! let names: Vec<String> = trie.search_by_prefix("jo").into_iter().collect();
//! assert_eq!(names, vec!["John Doe", "John Smith"]);
//! assert!(trie.search_by_prefix("xy").is_empty());
//! ```
//!
//! A trie is built by a single writer. Concurrent readers should go through
//! [`NameIndex`], which publishes finished tries as immutable snapshots.

mod index;
mod node;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use index::{NameIndex, UserName};
pub use node::{TrieChild, TrieNode};

/// Folds a fragment into the sequence of trie keys used to walk it.
///
/// Every character expands through its full uppercase mapping, so `ß`
/// walks the same path as `SS`.
fn fold_key(fragment: &str) -> impl Iterator<Item = char> + '_ {
    fragment.chars().flat_map(char::to_uppercase)
}

/// Case-insensitive prefix tree mapping name fragments to full names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of full-name leaves attached so far
    leaves: usize,
}

impl NameTrie {
    /// Creates a new empty `NameTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one name fragment associated with `full_name`.
    ///
    /// The fragment is walked one folded character at a time, creating nodes
    /// as needed. The node it ends on is marked as a name end and receives
    /// `full_name` as a leaf. An empty fragment attaches the leaf to the root.
    ///
    /// # Arguments
    ///
    /// * `fragment` - A first name or last name.
    /// * `full_name` - The full name to return for matches, stored verbatim.
    ///
    /// # Returns
    ///
    /// `true` if a new leaf was attached, `false` if this fragment already
    /// mapped to `full_name`.
    pub fn insert<F, N>(&mut self, fragment: F, full_name: N) -> bool
    where
        F: AsRef<str>,
        N: AsRef<str>,
    {
        let mut node = &mut self.root;
        for key in fold_key(fragment.as_ref()) {
            node = node.children.entry(key).or_default();
        }

        let attached = node.attach_full_name(full_name.as_ref());
        if attached {
            self.leaves += 1;
        }
        attached
    }

    /// Inserts both fragments of a user, each mapped to the user's full name.
    ///
    /// Empty fragments are skipped so a user without a last name is not
    /// registered at the root.
    ///
    /// # Returns
    ///
    /// The number of new leaves attached (0 to 2).
    pub fn insert_user(&mut self, user: &UserName) -> usize {
        let full_name = user.full_name();
        let mut attached = 0;
        for fragment in [user.first(), user.last()] {
            if !fragment.is_empty() && self.insert(fragment, &full_name) {
                attached += 1;
            }
        }
        attached
    }

    /// Returns every full name whose first or last name starts with `prefix`.
    ///
    /// Matching is case-insensitive. If the prefix leaves the trie at any
    /// point the result is empty; there is no fuzzy matching. An empty
    /// prefix returns every full name in the trie.
    pub fn search_by_prefix<P>(&self, prefix: P) -> BTreeSet<String>
    where
        P: AsRef<str>,
    {
        let mut names = BTreeSet::new();
        if let Some(start) = self.descend(prefix.as_ref()) {
            Self::collect_full_names(start, &mut names);
        }
        names
    }

    /// Checks whether `fragment` was inserted as a complete first or last name.
    pub fn contains_fragment<F>(&self, fragment: F) -> bool
    where
        F: AsRef<str>,
    {
        self.descend(fragment.as_ref())
            .is_some_and(TrieNode::is_name_end)
    }

    /// Returns the root node for callers that walk matches themselves.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of full-name leaves in the trie.
    ///
    /// A user inserted by first and last name counts twice.
    pub fn len(&self) -> usize {
        self.leaves
    }

    /// Checks if the trie holds no full names.
    pub fn is_empty(&self) -> bool {
        self.leaves == 0
    }

    /// Removes every entry from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.leaves = 0;
    }

    /// Walks the folded prefix from the root.
    fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        fold_key(prefix).try_fold(&self.root, |node, key| node.children.get(&key))
    }

    /// Harvests every full-name leaf in the subtree rooted at `start`.
    ///
    /// Uses an explicit stack rather than recursion.
    fn collect_full_names(start: &TrieNode, names: &mut BTreeSet<String>) {
        let mut pending = vec![start];
        while let Some(node) = pending.pop() {
            if node.is_name_end {
                names.extend(node.full_names.iter().cloned());
            }
            pending.extend(node.children.values());
        }
    }
}

impl<U> Extend<U> for NameTrie
where
    U: std::borrow::Borrow<UserName>,
{
    fn extend<I: IntoIterator<Item = U>>(&mut self, users: I) {
        for user in users {
            self.insert_user(user.borrow());
        }
    }
}

impl<U> FromIterator<U> for NameTrie
where
    U: std::borrow::Borrow<UserName>,
{
    fn from_iter<I: IntoIterator<Item = U>>(users: I) -> Self {
        let mut trie = Self::new();
        trie.extend(users);
        trie
    }
}
