//! Kilo Search Library
//!
//! This library contains the search core of Kilo Search: an in-memory name
//! trie used for autocomplete and the text analysis primitives that feed
//! relevance ranking. Both are pure in-memory algorithms with no I/O.
//!
//! # Architecture
//!
//! - [`data_structures::name_trie`] maps first and last names to full names
//!   for case-insensitive prefix lookup, and publishes finished tries to
//!   concurrent readers through [`data_structures::NameIndex`].
//! - [`analysis`] sanitizes free text and counts its n-grams.
//! - [`config`] and [`error`] carry the ambient configuration and error
//!   handling used by the binary.

pub mod analysis;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kilo Search.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
