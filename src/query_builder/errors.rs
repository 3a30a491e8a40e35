use thiserror::Error;

use super::classifier::QueryShape;
use crate::entity_catalog::errors::CatalogError;
use crate::statement_normalizer::NormalizeError;

/// Failure reported by the external statement generator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerationError {
    #[error("No statement for shape {shape:?} (unsupported request shape)")]
    UnsupportedShape { shape: QueryShape },

    #[error("Model resolution failed: {0}")]
    Model(String),
}

/// Single failure surface for query construction; wraps the failing stage
/// with its original cause.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryBuildError {
    #[error("CatalogError: {0}")]
    Catalog(#[from] CatalogError),

    #[error("GenerationError: {0}")]
    Generation(#[from] GenerationError),

    #[error("NormalizeError: {0}")]
    Normalize(#[from] NormalizeError),
}
