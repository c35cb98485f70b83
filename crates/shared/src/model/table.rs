use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(type_name = "table_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Free,
    Occupied,
    PendingPayment,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Table {
    pub id: i32,
    pub status: TableStatus,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Table {
    pub fn is_available(&self) -> bool {
        self.is_active && self.status == TableStatus::Free
    }
}
