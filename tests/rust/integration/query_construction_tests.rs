use querybridge::config::BuilderConfig;
use querybridge::entity_catalog::{EntityCatalog, EntityMapping};
use querybridge::query_builder::{
    GenerationError, QueryBuilder, QueryShape, StatementGenerator,
};
use querybridge::request::{EntityRequest, NavigationSegment, OperationKind};

/// Emits the raw, path-laden statements a template-based generator would
/// produce for each shape.
struct TemplateGenerator;

impl StatementGenerator for TemplateGenerator {
    fn generate(
        &self,
        _request: &EntityRequest,
        shape: QueryShape,
        _paging: bool,
    ) -> Result<String, GenerationError> {
        let statement = match shape {
            QueryShape::Select => "SELECT e FROM Order e",
            QueryShape::SelectSingle => "SELECT e FROM Order e WHERE e.id = 1",
            QueryShape::SelectCount => "SELECT COUNT(e) FROM Order e",
            QueryShape::Join => "SELECT e FROM Order e WHERE e.customer.region.code = 'EU'",
            QueryShape::JoinSingle => "SELECT e FROM Order e WHERE e.customer.id = 5 AND e.id = 1",
            QueryShape::JoinCount => "SELECT COUNT(e) FROM Order e WHERE e.customer.id = 5",
        };
        Ok(statement.to_string())
    }
}

fn order_catalog() -> EntityCatalog {
    let mut catalog = EntityCatalog::new();
    catalog.register("Orders", EntityMapping::new("Order"));
    catalog
}

fn navigated(operation: OperationKind) -> EntityRequest {
    EntityRequest::new("Orders", operation)
        .with_navigation(vec![NavigationSegment::new("customer")])
}

#[test]
fn test_flat_collection_listing_passes_through() {
    let catalog = order_catalog();
    let generator = TemplateGenerator;
    let builder = QueryBuilder::new(&catalog, &generator, &BuilderConfig::default());

    let info = builder
        .build(&EntityRequest::new("Orders", OperationKind::FetchCollection))
        .expect("build");

    assert!(!info.listener_supplied);
    assert_eq!(info.statement, "SELECT e FROM Order e");
}

#[test]
fn test_navigated_listing_is_join_normalized() {
    let catalog = order_catalog();
    let generator = TemplateGenerator;
    let builder = QueryBuilder::new(&catalog, &generator, &BuilderConfig::default());

    let info = builder
        .build(&navigated(OperationKind::FetchCollection))
        .expect("build");

    assert_eq!(
        info.statement,
        "SELECT DISTINCT e FROM Order e JOIN e.customer R1 JOIN R1.region R2 WHERE R2.code = 'EU'"
    );
}

#[test]
fn test_navigated_delete_uses_single_join_shape() {
    let catalog = order_catalog();
    let generator = TemplateGenerator;
    let builder = QueryBuilder::new(&catalog, &generator, &BuilderConfig::default());

    let statement = builder
        .build_statement(&navigated(OperationKind::Delete))
        .expect("build");

    assert_eq!(
        statement,
        "SELECT DISTINCT e FROM Order e JOIN e.customer R1 WHERE R1.id = 5 AND e.id = 1"
    );
}

#[test]
fn test_navigated_count_is_join_normalized() {
    let catalog = order_catalog();
    let generator = TemplateGenerator;
    let builder = QueryBuilder::new(&catalog, &generator, &BuilderConfig::default());

    let statement = builder
        .build_statement(&navigated(OperationKind::CountCollection))
        .expect("build");

    assert_eq!(
        statement,
        "SELECT DISTINCT COUNT(e) FROM Order e JOIN e.customer R1 WHERE R1.id = 5"
    );
}

#[test]
fn test_flat_single_fetch_is_untouched() {
    let catalog = order_catalog();
    let generator = TemplateGenerator;
    let builder = QueryBuilder::new(&catalog, &generator, &BuilderConfig::default());

    let statement = builder
        .build_statement(&EntityRequest::new("Orders", OperationKind::FetchSingle))
        .expect("build");

    assert_eq!(statement, "SELECT e FROM Order e WHERE e.id = 1");
}
