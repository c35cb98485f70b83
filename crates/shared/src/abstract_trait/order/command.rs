use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::OrderResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

/// A compare-and-set on an order row. `to = None` keeps the status and only
/// touches notes.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub expected: OrderStatus,
    pub to: Option<OrderStatus>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Places the order, its items, the stock decrements and the table
    /// occupation in one transaction.
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<(OrderModel, Vec<OrderItem>), RepositoryError>;

    /// Returns `Ok(None)` when the row no longer holds `change.expected`.
    async fn apply_change(
        &self,
        id: i32,
        change: &StatusChange,
    ) -> Result<Option<OrderModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        username: &str,
        req: &CreateOrderRequest,
    ) -> Result<OrderResponse, ServiceError>;
    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError>;
    async fn transition(
        &self,
        id: i32,
        to: OrderStatus,
    ) -> Result<OrderResponse, ServiceError>;
}
