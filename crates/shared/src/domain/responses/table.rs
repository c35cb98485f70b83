use crate::model::{Table, TableStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TableResponse {
    pub id: i32,
    pub status: TableStatus,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Table> for TableResponse {
    fn from(value: Table) -> Self {
        TableResponse {
            id: value.id,
            status: value.status,
            capacity: value.capacity,
            is_active: value.is_active,
            created_at: value.created_at,
        }
    }
}
