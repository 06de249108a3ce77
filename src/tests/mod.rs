//! Test modules for Kilo Search.
//!
//! This module contains crate-internal testing infrastructure:
//! - Configuration and error handling suites
//! - Property-based tests for the name trie using proptest
//! - Shared strategies and fixtures


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{name_strategy, user_strategy, TestFixture};
