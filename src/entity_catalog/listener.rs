//! Per-entity listener overrides.
//!
//! A listener can fully replace internal query construction for its entity:
//! when it returns a statement, classification and normalization are skipped
//! and the text is trusted as directly executable. Returning `None` defers
//! to internal construction.
//!
//! Two capabilities exist:
//! - [`TombstoneListener`]: consulted for collection listings, typically to
//!   filter soft-deleted rows out of the result.
//! - [`QueryExtensionListener`]: consulted for every other operation kind.
//!
//! Listeners are registered as factories so that construction failures
//! surface as errors instead of being silently ignored.

use std::sync::Arc;

use super::errors::ListenerInitError;
use crate::request::EntityRequest;

/// Soft-delete aware override for collection listings.
pub trait TombstoneListener: std::fmt::Debug {
    /// A finished, executable statement for this listing, or `None` to defer
    /// to internal construction.
    fn collection_statement(&self, request: &EntityRequest) -> Option<String>;
}

/// Generic query override for non-listing operations.
pub trait QueryExtensionListener {
    /// A finished, executable statement for this request, or `None` to defer
    /// to internal construction.
    fn statement(&self, request: &EntityRequest) -> Option<String>;
}

pub type TombstoneListenerFactory =
    Arc<dyn Fn() -> Result<Box<dyn TombstoneListener>, ListenerInitError> + Send + Sync>;

pub type ExtensionListenerFactory =
    Arc<dyn Fn() -> Result<Box<dyn QueryExtensionListener>, ListenerInitError> + Send + Sync>;
