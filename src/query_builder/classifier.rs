use serde::{Deserialize, Serialize};

use crate::request::{EntityRequest, OperationKind};

/// The structural category of backend query a request implies: collection vs
/// single, joined vs flat, count vs data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryShape {
    Select,
    SelectSingle,
    SelectCount,
    Join,
    JoinSingle,
    JoinCount,
}

impl QueryShape {
    /// Paging is passed through to the generator for collection listings only.
    pub fn supports_paging(&self) -> bool {
        matches!(self, QueryShape::Select | QueryShape::Join)
    }
}

/// Map (operation kind, presence of navigation) to a query shape.
///
/// Total over both inputs; every request classifies to exactly one shape.
pub fn classify(operation: OperationKind, has_navigation: bool) -> QueryShape {
    if has_navigation {
        match operation {
            OperationKind::FetchCollection => QueryShape::Join,
            OperationKind::FetchSingle | OperationKind::Delete | OperationKind::PartialUpdate => {
                QueryShape::JoinSingle
            }
            OperationKind::CountCollection | OperationKind::CountSingle => QueryShape::JoinCount,
        }
    } else {
        match operation {
            OperationKind::FetchCollection => QueryShape::Select,
            OperationKind::FetchSingle | OperationKind::Delete | OperationKind::PartialUpdate => {
                QueryShape::SelectSingle
            }
            OperationKind::CountCollection | OperationKind::CountSingle => QueryShape::SelectCount,
        }
    }
}

pub fn classify_request(request: &EntityRequest) -> QueryShape {
    classify(request.operation, request.has_navigation())
}
