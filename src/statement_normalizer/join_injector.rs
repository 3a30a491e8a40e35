//! Join clause insertion and alias rewriting.
//!
//! Once a reference is resolved to an alias, the statement gains an explicit
//! `JOIN <target> <alias>` clause and every whole-token occurrence of the
//! resolved prefix is rewritten to the alias.

const WHERE_KEYWORD: &str = "WHERE";
const ORDER_BY_KEYWORD: &str = "ORDER BY";
const SELECT_KEYWORD: &str = "SELECT ";
const SELECT_DISTINCT_KEYWORD: &str = "SELECT DISTINCT ";

/// Insert `JOIN <target> <alias>` at the correct syntactic position:
/// immediately before a filter clause if present, else immediately before an
/// ordering clause, else at the end of the from-clause region (the end of
/// the statement). Surrounding text is preserved verbatim.
pub(crate) fn insert_join(statement: &str, target: &str, alias: &str) -> String {
    let insert_at = statement
        .find(WHERE_KEYWORD)
        .or_else(|| statement.find(ORDER_BY_KEYWORD));

    match insert_at {
        Some(position) => format!(
            "{}JOIN {} {} {}",
            &statement[..position],
            target,
            alias,
            &statement[position..]
        ),
        None => format!("{statement} JOIN {target} {alias}"),
    }
}

/// Rewrite every occurrence of `<prefix>.` to `<alias>.` where the prefix
/// starts a token (preceded by start-of-text, whitespace, or `(`).
/// Identifiers that merely share a substring with the prefix are untouched.
pub(crate) fn rewrite_prefix(statement: &str, prefix: &str, alias: &str) -> String {
    let needle = format!("{prefix}.");
    let replacement = format!("{alias}.");

    let mut rewritten = String::with_capacity(statement.len());
    let mut remainder = statement;
    while let Some(index) = remainder.find(&needle) {
        let (head, tail) = remainder.split_at(index);
        rewritten.push_str(head);

        let at_token_start = match rewritten.chars().last() {
            None => true,
            Some(preceding) => preceding.is_whitespace() || preceding == '(',
        };
        if at_token_start {
            rewritten.push_str(&replacement);
        } else {
            rewritten.push_str(&needle);
        }
        remainder = &tail[needle.len()..];
    }
    rewritten.push_str(remainder);
    rewritten
}

/// Rewrite the first selection keyword to its distinct-result variant, to
/// eliminate duplicate rows a one-to-many join can introduce. A selection
/// that is already distinct is left alone, so the marker is applied at most
/// once; statements without a selection keyword pass through unchanged.
pub(crate) fn mark_distinct(statement: &str) -> String {
    if statement.contains(SELECT_DISTINCT_KEYWORD) {
        return statement.to_string();
    }
    statement.replacen(SELECT_KEYWORD, SELECT_DISTINCT_KEYWORD, 1)
}
