use crate::model::{Order, OrderItem, OrderStatus, PaymentStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[schema(value_type = String, example = "2.50")]
    pub unit_price: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.id,
            product_id: value.product_id,
            quantity: value.quantity,
            unit_price: value.unit_price,
            notes: value.notes,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub table_id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    #[schema(value_type = String, example = "5.00")]
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    pub fn from_parts(order: Order, items: Vec<OrderItem>) -> Self {
        OrderResponse {
            id: order.id,
            table_id: order.table_id,
            user_id: order.user_id,
            status: order.status,
            total_amount: order.total_amount,
            payment_status: order.payment_status,
            notes: order.notes,
            created_at: order.created_at,
            updated_at: order.updated_at,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}
