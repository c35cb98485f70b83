use crate::{
    abstract_trait::PaymentRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Payment,
};
use async_trait::async_trait;
use tracing::error;

pub struct PaymentRepository {
    db: ConnectionPool,
}

impl PaymentRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepositoryTrait for PaymentRepository {
    async fn find_by_order(&self, order_id: i32) -> Result<Vec<Payment>, RepositoryError> {
        sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, order_id, method, amount, status, external_ref, created_at
            FROM payments
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch payments for order {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })
    }
}
