use super::classifier::QueryShape;
use super::errors::GenerationError;
use crate::request::EntityRequest;

/// External collaborator that turns a classified request into raw statement
/// text. The text may still contain multi-level relationship references;
/// normalization happens after generation.
///
/// When `paging` is set the generator is expected to apply the configured
/// page limit itself; paging is passed through, never implemented here.
pub trait StatementGenerator {
    fn generate(
        &self,
        request: &EntityRequest,
        shape: QueryShape,
        paging: bool,
    ) -> Result<String, GenerationError>;
}
