//! Query construction orchestration.
//!
//! [`QueryBuilder`] drives the full translation: resolve the collection in
//! the entity catalog, give a registered listener the chance to supply the
//! statement outright, otherwise classify the request, obtain raw text from
//! the statement generator, and normalize it for execution.

pub mod classifier;
pub mod errors;
pub mod statement_generator;

pub use classifier::{classify, classify_request, QueryShape};
pub use errors::{GenerationError, QueryBuildError};
pub use statement_generator::StatementGenerator;

use crate::config::BuilderConfig;
use crate::entity_catalog::errors::CatalogError;
use crate::entity_catalog::{EntityCatalog, EntityMapping};
use crate::request::{EntityRequest, OperationKind};
use crate::statement_normalizer;

/// The executable statement plus whether a listener supplied it (bypassing
/// classification and normalization).
#[derive(Debug, Clone, PartialEq)]
pub struct QueryInfo {
    pub statement: String,
    pub listener_supplied: bool,
}

/// Builds executable statements for entity requests. Holds no state across
/// calls; each normalization pass owns a fresh alias registry.
pub struct QueryBuilder<'a> {
    catalog: &'a EntityCatalog,
    generator: &'a dyn StatementGenerator,
    page_size: usize,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(
        catalog: &'a EntityCatalog,
        generator: &'a dyn StatementGenerator,
        config: &BuilderConfig,
    ) -> Self {
        QueryBuilder {
            catalog,
            generator,
            page_size: config.page_size,
        }
    }

    /// Build the executable statement for `request`.
    pub fn build(&self, request: &EntityRequest) -> Result<QueryInfo, QueryBuildError> {
        let mapping = self.catalog.resolve(&request.collection)?;

        if let Some(statement) = self.listener_statement(mapping, request)? {
            log::debug!(
                "listener-supplied statement for `{}`, skipping normalization",
                request.collection
            );
            return Ok(QueryInfo {
                statement,
                listener_supplied: true,
            });
        }

        let shape = classifier::classify_request(request);
        let paging = self.page_size > 0 && shape.supports_paging();
        log::debug!(
            "classified {:?} on `{}` as {:?} (paging: {})",
            request.operation,
            request.collection,
            shape,
            paging
        );

        let raw = self.generator.generate(request, shape, paging)?;
        let statement = statement_normalizer::normalize(&raw)?;
        Ok(QueryInfo {
            statement,
            listener_supplied: false,
        })
    }

    /// Convenience form for callers that do not need the listener flag.
    pub fn build_statement(&self, request: &EntityRequest) -> Result<String, QueryBuildError> {
        self.build(request).map(|info| info.statement)
    }

    /// Consult the listener registered for this request's operation kind:
    /// collection listings use the tombstone listener, everything else the
    /// query-extension listener. An empty statement is "no override".
    fn listener_statement(
        &self,
        mapping: &EntityMapping,
        request: &EntityRequest,
    ) -> Result<Option<String>, QueryBuildError> {
        let instantiation_error = |source| CatalogError::ListenerInstantiation {
            collection: request.collection.clone(),
            source,
        };

        let statement = match request.operation {
            OperationKind::FetchCollection => mapping
                .instantiate_tombstone_listener()
                .map_err(instantiation_error)?
                .and_then(|listener| listener.collection_statement(request)),
            _ => mapping
                .instantiate_extension_listener()
                .map_err(instantiation_error)?
                .and_then(|listener| listener.statement(request)),
        };

        Ok(statement.filter(|s| !s.is_empty()))
    }
}
