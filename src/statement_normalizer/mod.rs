//! Path Normalization for Generated Statements
//!
//! Generated statement text may reference related entities through dotted
//! multi-level paths (e.g. `e.child.grandchild.value`). Backend query
//! languages require such traversals to be expressed as explicit joins.
//!
//! # How it works:
//! 1. Detect the leftmost token of >= 3 dot-separated components
//! 2. Resolve its two-segment prefix to a join alias (reuse or allocate)
//! 3. On allocation, insert `JOIN <prefix> <alias>` before the filter
//!    clause, else before the ordering clause, else at the end
//! 4. Rewrite every whole-token occurrence of `<prefix>.` to `<alias>.`
//! 5. Repeat until no multi-level reference remains, then mark the
//!    selection distinct to eliminate duplicate rows joins can introduce
//!
//! Statements without multi-level references pass through unchanged.

mod alias_registry;
pub mod errors;
mod join_injector;
mod path_detector;

pub use alias_registry::AliasRegistry;
pub use errors::NormalizeError;

/// Normalize `statement` with a fresh alias registry.
pub fn normalize(statement: &str) -> Result<String, NormalizeError> {
    let mut registry = AliasRegistry::new();
    normalize_with_registry(statement, &mut registry)
}

/// Normalize `statement`, reusing aliases already bound in `registry`.
///
/// The registry is owned by one normalization pass; callers seeding it are
/// asserting that the seeded aliases are already introduced in the
/// statement text.
pub fn normalize_with_registry(
    statement: &str,
    registry: &mut AliasRegistry,
) -> Result<String, NormalizeError> {
    let Some(mut pending) = path_detector::find_deep_path(statement) else {
        return Ok(statement.to_string());
    };

    // A join the generator already emitted seeds the registry so its alias
    // is reused instead of shadowed by a duplicate join.
    if let Some((target, alias)) = path_detector::find_existing_join(statement) {
        log::debug!("pre-existing join: {target} {alias}");
        registry.bind(target, alias);
    }

    // Every iteration removes one level from at least one unresolved token,
    // so the input's dot count bounds the loop. Exceeding it means the
    // statement is malformed.
    let limit = statement.matches('.').count() + 1;
    let mut iterations = 0usize;

    let mut normalized = statement.to_string();
    loop {
        if iterations == limit {
            return Err(NormalizeError::IterationLimit { limit });
        }
        iterations += 1;

        let prefix = pending.join_prefix()?;
        let alias = match registry.lookup(&prefix) {
            Some(alias) => alias.to_string(),
            None => {
                let alias = registry.allocate(&prefix);
                normalized = join_injector::insert_join(&normalized, &prefix, &alias);
                log::debug!("join injected: {prefix} -> {alias}");
                alias
            }
        };
        normalized = join_injector::rewrite_prefix(&normalized, &prefix, &alias);

        match path_detector::find_deep_path(&normalized) {
            Some(next) => pending = next,
            None => break,
        }
    }

    Ok(join_injector::mark_distinct(&normalized))
}
