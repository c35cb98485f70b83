use crate::{
    domain::{
        requests::FindAllOrders,
        responses::{OrderResponse, PaymentResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItem>, RepositoryError>;
    /// Oldest first, id breaking ties.
    async fn find_by_statuses(
        &self,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderModel>, RepositoryError>;
    /// Oldest order in `status`, id breaking ties.
    async fn find_oldest(
        &self,
        status: OrderStatus,
    ) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_created_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<OrderModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<OrderResponse, ServiceError>;
    async fn find_kitchen_pending(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn find_payments(&self, order_id: i32) -> Result<Vec<PaymentResponse>, ServiceError>;
}
