//! Detection of unresolved multi-level relationship references.
//!
//! A reference needs resolution when the statement contains, immediately
//! after whitespace or an opening parenthesis (or at the very start), a
//! token of at least three dot-separated components. Detection is leftmost
//! first; the normalization loop re-scans after every rewrite.

use regex::Regex;
use std::sync::LazyLock;

use super::errors::NormalizeError;

/// Matches a dotted token of >= 3 components following start-of-text,
/// whitespace, or `(`. Components carry no whitespace, dots, or `(`, so a
/// reference inside a function call resolves from its own first segment.
static DEEP_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s(])([^\s(.]+(?:\.[^\s(.]+){2,})").unwrap()
});

/// Matches a join clause already present in generator-supplied text.
/// Captures: (1) join target, (2) alias.
static EXISTING_JOIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\sJOIN\s(\S+)\s(\S+)").unwrap());

/// An unresolved multi-level reference extracted from statement text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DeepPath {
    pub token: String,
}

impl DeepPath {
    /// The two-segment prefix of the token - the join key.
    pub fn join_prefix(&self) -> Result<String, NormalizeError> {
        let mut segments = self.token.splitn(3, '.');
        match (segments.next(), segments.next()) {
            (Some(root), Some(second)) if !root.is_empty() && !second.is_empty() => {
                Ok(format!("{root}.{second}"))
            }
            _ => Err(NormalizeError::MalformedPathToken {
                token: self.token.clone(),
            }),
        }
    }
}

/// Leftmost unresolved multi-level reference in `statement`, if any.
pub(crate) fn find_deep_path(statement: &str) -> Option<DeepPath> {
    DEEP_PATH_PATTERN.captures(statement).map(|caps| DeepPath {
        token: caps[1].to_string(),
    })
}

/// First `JOIN <target> <alias>` pair already present in the text.
///
/// Only one pre-existing pair is detected even when more are present;
/// generator output carries at most one join ahead of normalization, and
/// this intentionally preserves that contract instead of generalizing.
pub(crate) fn find_existing_join(statement: &str) -> Option<(String, String)> {
    EXISTING_JOIN_PATTERN
        .captures(statement)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}
