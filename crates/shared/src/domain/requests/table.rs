use super::default_limit;
use crate::model::TableStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllTables {
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must not be negative"))]
    pub skip: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,

    #[serde(default)]
    pub include_inactive: bool,
}

impl Default for FindAllTables {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            include_inactive: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTableRequest {
    #[validate(range(min = 1, message = "Capacity must be greater than 0"))]
    #[schema(example = 4)]
    pub capacity: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTableRequest {
    #[validate(range(min = 1, message = "Capacity must be greater than 0"))]
    pub capacity: Option<i32>,

    pub status: Option<TableStatus>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTableStatusRequest {
    pub status: TableStatus,
}
