use crate::{errors::RepositoryError, model::Payment};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentRepository = Arc<dyn PaymentRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PaymentRepositoryTrait {
    async fn find_by_order(&self, order_id: i32) -> Result<Vec<Payment>, RepositoryError>;
}
