use crate::model::{Order, OrderStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KitchenStatsResponse {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub in_preparation: i64,
    pub completed_orders: i64,
    pub delivered_orders: i64,
    pub cancelled_orders: i64,
    /// Mean minutes between creation and the last update of orders sitting in `ready`.
    pub avg_preparation_time: f64,
}

impl KitchenStatsResponse {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = KitchenStatsResponse {
            total_orders: orders.len() as i64,
            ..Default::default()
        };

        let mut ready_seconds = 0.0;

        for order in orders {
            match order.status {
                OrderStatus::Pending => stats.pending_orders += 1,
                OrderStatus::InPreparation => stats.in_preparation += 1,
                OrderStatus::Ready => {
                    stats.completed_orders += 1;
                    let elapsed = order.updated_at - order.created_at;
                    ready_seconds += elapsed.num_milliseconds() as f64 / 1000.0;
                }
                OrderStatus::Delivered => stats.delivered_orders += 1,
                OrderStatus::Cancelled => stats.cancelled_orders += 1,
            }
        }

        if stats.completed_orders > 0 {
            let minutes = ready_seconds / 60.0 / stats.completed_orders as f64;
            stats.avg_preparation_time = (minutes * 100.0).round() / 100.0;
        }

        stats
    }
}
