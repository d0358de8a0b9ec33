//! Success bodies for the stock routes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ROW_ADDED: &str = "Row added";
pub const ROW_UPDATED: &str = "Row updated";
pub const ROW_DELETED: &str = "Row deleted";

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CreatedBody {
    pub message: String,
    pub id: u64,
}

pub fn row_added(id: u64) -> CreatedBody {
    CreatedBody {
        message: ROW_ADDED.to_string(),
        id,
    }
}

pub fn row_updated() -> MessageBody {
    MessageBody {
        message: ROW_UPDATED.to_string(),
    }
}

pub fn row_deleted() -> MessageBody {
    MessageBody {
        message: ROW_DELETED.to_string(),
    }
}
