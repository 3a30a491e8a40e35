//! Structured entity-query requests.
//!
//! An [`EntityRequest`] is the immutable input to query construction: the
//! target collection, an optional navigation path to a related entity, and
//! the kind of operation the caller wants to perform. Requests are produced
//! by an outer protocol layer and are read-only from here on.

use serde::{Deserialize, Serialize};

/// The operation a request asks the persistence layer to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    FetchCollection,
    FetchSingle,
    CountCollection,
    CountSingle,
    Delete,
    PartialUpdate,
}

/// One step of a navigation path, traversing a relationship from the target
/// collection towards a related entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSegment {
    pub name: String,
}

impl NavigationSegment {
    pub fn new(name: impl Into<String>) -> Self {
        NavigationSegment { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRequest {
    pub collection: String,
    pub navigation: Vec<NavigationSegment>,
    pub operation: OperationKind,
}

impl EntityRequest {
    pub fn new(collection: impl Into<String>, operation: OperationKind) -> Self {
        EntityRequest {
            collection: collection.into(),
            navigation: vec![],
            operation,
        }
    }

    pub fn with_navigation(mut self, segments: Vec<NavigationSegment>) -> Self {
        self.navigation = segments;
        self
    }

    pub fn has_navigation(&self) -> bool {
        !self.navigation.is_empty()
    }
}
