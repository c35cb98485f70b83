use super::default_limit;
use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllOrders {
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must not be negative"))]
    pub skip: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,

    pub status: Option<OrderStatus>,
}

impl Default for FindAllOrders {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            status: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderItemRequest {
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, max = 1000, message = "Quantity must be between 1 and 1000"))]
    #[schema(example = 2)]
    pub quantity: i32,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = 1)]
    pub table_id: i32,

    #[validate(length(min = 1, message = "An order needs at least one item"), nested)]
    pub items: Vec<CreateOrderItemRequest>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    pub status: Option<OrderStatus>,
    pub notes: Option<String>,
}
