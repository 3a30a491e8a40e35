//! Entity catalog: collection metadata and listener registration.
//!
//! The catalog maps a collection identifier to its [`EntityMapping`]: the
//! backing entity name plus optional listener factories that may override
//! query construction for that entity.

pub mod errors;
pub mod listener;

use std::collections::HashMap;

use errors::{CatalogError, ListenerInitError};
use listener::{
    ExtensionListenerFactory, QueryExtensionListener, TombstoneListener, TombstoneListenerFactory,
};

/// Metadata for one collection: the backing entity and its listener hooks.
#[derive(Clone)]
pub struct EntityMapping {
    entity_name: String,
    tombstone_listener: Option<TombstoneListenerFactory>,
    extension_listener: Option<ExtensionListenerFactory>,
}

impl std::fmt::Debug for EntityMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityMapping")
            .field("entity_name", &self.entity_name)
            .field("tombstone_listener", &self.tombstone_listener.is_some())
            .field("extension_listener", &self.extension_listener.is_some())
            .finish()
    }
}

impl EntityMapping {
    pub fn new(entity_name: impl Into<String>) -> Self {
        EntityMapping {
            entity_name: entity_name.into(),
            tombstone_listener: None,
            extension_listener: None,
        }
    }

    pub fn with_tombstone_listener(mut self, factory: TombstoneListenerFactory) -> Self {
        self.tombstone_listener = Some(factory);
        self
    }

    pub fn with_extension_listener(mut self, factory: ExtensionListenerFactory) -> Self {
        self.extension_listener = Some(factory);
        self
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Instantiate the tombstone listener, if one is registered.
    pub fn instantiate_tombstone_listener(
        &self,
    ) -> Result<Option<Box<dyn TombstoneListener>>, ListenerInitError> {
        self.tombstone_listener.as_ref().map(|factory| factory()).transpose()
    }

    /// Instantiate the query-extension listener, if one is registered.
    pub fn instantiate_extension_listener(
        &self,
    ) -> Result<Option<Box<dyn QueryExtensionListener>>, ListenerInitError> {
        self.extension_listener.as_ref().map(|factory| factory()).transpose()
    }
}

#[derive(Default)]
pub struct EntityCatalog {
    mappings: HashMap<String, EntityMapping>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, collection: impl Into<String>, mapping: EntityMapping) {
        self.mappings.insert(collection.into(), mapping);
    }

    pub fn resolve(&self, collection: &str) -> Result<&EntityMapping, CatalogError> {
        self.mappings
            .get(collection)
            .ok_or_else(|| CatalogError::UnknownCollection {
                collection: collection.to_string(),
            })
    }
}
