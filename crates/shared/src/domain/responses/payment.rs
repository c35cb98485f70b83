use crate::model::{Payment, PaymentMethod, PaymentStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i32,
    pub order_id: i32,
    pub method: PaymentMethod,
    #[schema(value_type = String)]
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub external_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        PaymentResponse {
            id: value.id,
            order_id: value.order_id,
            method: value.method,
            amount: value.amount,
            status: value.status,
            external_ref: value.external_ref,
            created_at: value.created_at,
        }
    }
}
