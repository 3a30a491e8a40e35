use thiserror::Error;

/// Failure reported by a listener factory while constructing its listener.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct ListenerInitError(pub String);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("No entity mapping found for collection `{collection}`")]
    UnknownCollection { collection: String },

    #[error("Failed to instantiate listener for collection `{collection}`: {source}")]
    ListenerInstantiation {
        collection: String,
        #[source]
        source: ListenerInitError,
    },
}
