use std::sync::Arc;

use querybridge::config::BuilderConfig;
use querybridge::entity_catalog::errors::{CatalogError, ListenerInitError};
use querybridge::entity_catalog::listener::{QueryExtensionListener, TombstoneListener};
use querybridge::entity_catalog::{EntityCatalog, EntityMapping};
use querybridge::query_builder::{
    GenerationError, QueryBuildError, QueryBuilder, QueryShape, StatementGenerator,
};
use querybridge::request::{EntityRequest, OperationKind};

/// Generator that must never be reached when a listener takes over.
struct PanickingGenerator;

impl StatementGenerator for PanickingGenerator {
    fn generate(
        &self,
        _request: &EntityRequest,
        _shape: QueryShape,
        _paging: bool,
    ) -> Result<String, GenerationError> {
        panic!("generator must not be consulted when a listener supplies the statement");
    }
}

#[derive(Debug)]
struct ActiveOrderListing;

impl TombstoneListener for ActiveOrderListing {
    fn collection_statement(&self, _request: &EntityRequest) -> Option<String> {
        Some("SELECT e FROM Order e WHERE e.deleted = false".to_string())
    }
}

struct PinnedOrderLookup;

impl QueryExtensionListener for PinnedOrderLookup {
    fn statement(&self, _request: &EntityRequest) -> Option<String> {
        Some("SELECT e FROM Order e WHERE e.pinned = true".to_string())
    }
}

#[test]
fn test_tombstone_listener_bypasses_construction() {
    let mut catalog = EntityCatalog::new();
    catalog.register(
        "Orders",
        EntityMapping::new("Order")
            .with_tombstone_listener(Arc::new(|| Ok(Box::new(ActiveOrderListing)))),
    );
    let generator = PanickingGenerator;
    let builder = QueryBuilder::new(&catalog, &generator, &BuilderConfig::default());

    let info = builder
        .build(&EntityRequest::new("Orders", OperationKind::FetchCollection))
        .expect("build");

    assert!(info.listener_supplied);
    assert_eq!(
        info.statement,
        "SELECT e FROM Order e WHERE e.deleted = false"
    );
}

#[test]
fn test_extension_listener_bypasses_construction() {
    let mut catalog = EntityCatalog::new();
    catalog.register(
        "Orders",
        EntityMapping::new("Order")
            .with_extension_listener(Arc::new(|| Ok(Box::new(PinnedOrderLookup)))),
    );
    let generator = PanickingGenerator;
    let builder = QueryBuilder::new(&catalog, &generator, &BuilderConfig::default());

    let info = builder
        .build(&EntityRequest::new("Orders", OperationKind::FetchSingle))
        .expect("build");

    assert!(info.listener_supplied);
    assert_eq!(
        info.statement,
        "SELECT e FROM Order e WHERE e.pinned = true"
    );
}

#[test]
fn test_failing_listener_factory_is_a_construction_error() {
    let mut catalog = EntityCatalog::new();
    catalog.register(
        "Orders",
        EntityMapping::new("Order").with_extension_listener(Arc::new(|| {
            Err(ListenerInitError("listener type is abstract".into()))
        })),
    );
    let generator = PanickingGenerator;
    let builder = QueryBuilder::new(&catalog, &generator, &BuilderConfig::default());

    let err = builder
        .build(&EntityRequest::new("Orders", OperationKind::PartialUpdate))
        .unwrap_err();

    assert_eq!(
        err,
        QueryBuildError::Catalog(CatalogError::ListenerInstantiation {
            collection: "Orders".to_string(),
            source: ListenerInitError("listener type is abstract".into()),
        })
    );
}
