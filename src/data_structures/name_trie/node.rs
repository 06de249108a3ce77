// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the name trie.
//!
//! A node keeps its two kinds of children apart: single-character fragment
//! continuations live in `children`, while the full names that terminate a
//! fragment live in `full_names`.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// A node in the name trie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    /// Fragment continuations keyed by one uppercase character
    pub(crate) children: HashMap<char, TrieNode>,

    /// Whether the path to this node spells a complete first or last name
    pub(crate) is_name_end: bool,

    /// Full-name leaves attached to this fragment end
    pub(crate) full_names: BTreeSet<String>,
}

/// A borrowed view of one child of a [`TrieNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieChild<'a> {
    /// Continuation of a fragment by one uppercase character.
    Fragment(char, &'a TrieNode),

    /// A full name terminating the fragment spelled so far.
    NameLeaf(&'a str),
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the path from the root to this node spells a complete fragment.
    pub fn is_name_end(&self) -> bool {
        self.is_name_end
    }

    /// Full names attached to this node, in lexicographic order.
    pub fn full_names(&self) -> impl Iterator<Item = &str> {
        self.full_names.iter().map(String::as_str)
    }

    /// Returns the fragment child for an already folded key character.
    pub fn child(&self, key: char) -> Option<&TrieNode> {
        self.children.get(&key)
    }

    /// Iterates over every child of this node.
    ///
    /// Name leaves come first (sorted), followed by fragment continuations
    /// in no particular order.
    pub fn children(&self) -> impl Iterator<Item = TrieChild<'_>> {
        self.full_names
            .iter()
            .map(|name| TrieChild::NameLeaf(name.as_str()))
            .chain(
                self.children
                    .iter()
                    .map(|(key, node)| TrieChild::Fragment(*key, node)),
            )
    }

    /// Number of fragment continuations below this node.
    pub fn fragment_count(&self) -> usize {
        self.children.len()
    }

    /// Attaches a full-name leaf and marks this node as a name end.
    ///
    /// Returns `true` if the leaf was not already present.
    pub(crate) fn attach_full_name(&mut self, full_name: &str) -> bool {
        self.is_name_end = true;
        if self.full_names.contains(full_name) {
            return false;
        }
        self.full_names.insert(full_name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_marks_name_end() {
        let mut node = TrieNode::new();
        assert!(!node.is_name_end());

        assert!(node.attach_full_name("Anna Anderson"));
        assert!(node.is_name_end());
        assert!(!node.attach_full_name("Anna Anderson"));
        assert_eq!(node.full_names().collect::<Vec<_>>(), vec!["Anna Anderson"]);
    }

    #[test]
    fn test_children_yields_both_kinds() {
        let mut node = TrieNode::new();
        node.attach_full_name("Al Smith");
        node.children.insert('X', TrieNode::new());

        let children: Vec<TrieChild<'_>> = node.children().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], TrieChild::NameLeaf("Al Smith"));
        assert!(matches!(children[1], TrieChild::Fragment('X', _)));
    }
}
