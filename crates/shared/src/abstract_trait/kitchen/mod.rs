use crate::{
    domain::responses::{KitchenStatsResponse, OrderResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynKitchenService = Arc<dyn KitchenServiceTrait + Send + Sync>;

#[async_trait]
pub trait KitchenServiceTrait {
    async fn queue(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn next(&self) -> Result<OrderResponse, ServiceError>;
    async fn start_preparation(&self, id: i32) -> Result<OrderResponse, ServiceError>;
    async fn complete(&self, id: i32) -> Result<OrderResponse, ServiceError>;
    async fn stats(&self, since: DateTime<Utc>) -> Result<KitchenStatsResponse, ServiceError>;
}
