// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Text sanitization.

/// The only punctuation that survives sanitization, so contractions stay
/// single tokens.
pub const APOSTROPHE: char = '\'';

/// Whether `c` survives sanitization.
#[inline]
fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || c == APOSTROPHE
}

/// Lowercases `text` and deletes every character that is not a letter, a
/// digit, whitespace or an apostrophe.
///
/// Removed characters are deleted outright rather than replaced, so letters
/// on either side of them fuse (`"D.on't"` becomes `"don't"`). Whitespace,
/// including leading and trailing runs, is kept exactly as it was.
///
/// # Example
///
/// ```
/// use kilo_search_lib::analysis::sanitize;
///
/// assert_eq!(sanitize("Don't you dare!!"), "don't you dare");
/// assert_eq!(sanitize("D.on't you 2 dare!,!"), "don't you 2 dare");
/// ```
pub fn sanitize(text: &str) -> String {
    text.to_lowercase().chars().filter(|&c| is_kept(c)).collect()
}

/// Sanitizes text that may be absent.
///
/// Absent text stays absent.
pub fn sanitize_opt(text: Option<&str>) -> Option<String> {
    text.map(sanitize)
}
