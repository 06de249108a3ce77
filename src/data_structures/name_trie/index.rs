// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Snapshot publishing for the name trie.
//!
//! Tries are built off to the side by a single writer and then swapped in
//! whole. Readers clone the current `Arc` and search it without holding any
//! lock, so a rebuild never blocks a lookup for longer than a pointer copy.

use std::borrow::Borrow;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::NameTrie;
use crate::config::index::IndexConfig;

/// The two name fragments of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName {
    first: String,
    last: String,
}

impl UserName {
    /// Creates a user name from its first and last fragments.
    pub fn new<F, L>(first: F, last: L) -> Self
    where
        F: Into<String>,
        L: Into<String>,
    {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Parses one roster line.
    ///
    /// The first whitespace-delimited word is the first name and the rest of
    /// the line, trimmed, is the last name. Blank lines yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match line.split_once(char::is_whitespace) {
            Some((first, last)) => Some(Self::new(first, last.trim())),
            None => Some(Self::new(line, "")),
        }
    }

    /// The first name fragment.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The last name fragment.
    pub fn last(&self) -> &str {
        &self.last
    }

    /// The display name: the non-empty fragments joined by one space.
    pub fn full_name(&self) -> String {
        match (self.first.is_empty(), self.last.is_empty()) {
            (false, false) => format!("{} {}", self.first, self.last),
            (false, true) => self.first.clone(),
            (true, _) => self.last.clone(),
        }
    }
}

/// Published name trie shared by concurrent readers.
#[derive(Debug)]
pub struct NameIndex {
    /// The currently published trie
    current: RwLock<Arc<NameTrie>>,

    /// Index configuration
    config: IndexConfig,
}

impl NameIndex {
    /// Creates an index publishing an empty trie.
    pub fn new(config: IndexConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(NameTrie::new())),
            config,
        }
    }

    /// Returns the configuration this index was created with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Returns the currently published trie.
    ///
    /// The snapshot stays valid and unchanged even if a newer trie is
    /// published while the caller is still using it.
    pub fn snapshot(&self) -> Arc<NameTrie> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the published trie.
    pub fn publish(&self, trie: NameTrie) {
        let leaves = trie.len();
        let previous = {
            let mut current = self.current.write();
            std::mem::replace(&mut *current, Arc::new(trie))
        };
        debug!(
            leaves,
            previous_leaves = previous.len(),
            "Published name trie snapshot"
        );
    }

    /// Builds a fresh trie from `users` and publishes it.
    ///
    /// # Returns
    ///
    /// The number of users indexed.
    pub fn rebuild<I, U>(&self, users: I) -> usize
    where
        I: IntoIterator<Item = U>,
        U: Borrow<UserName>,
    {
        let mut trie = NameTrie::new();
        let mut count = 0;
        for user in users {
            trie.insert_user(user.borrow());
            count += 1;
        }

        debug!(users = count, "Rebuilt name trie");
        self.publish(trie);
        count
    }

    /// Returns autocomplete suggestions for `prefix`.
    ///
    /// Matches come from the current snapshot in lexicographic order and are
    /// capped at `max_suggestions`.
    pub fn suggest<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.snapshot()
            .search_by_prefix(prefix)
            .into_iter()
            .take(self.config.max_suggestions)
            .collect()
    }
}

impl Default for NameIndex {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}
