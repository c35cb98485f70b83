use super::{ORDER_COLUMNS, ORDER_ITEM_COLUMNS};
use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllOrders,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{error, info};

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderModel>, RepositoryError> {
        info!(
            "🔍 Listing orders skip={} limit={} status={:?}",
            req.skip, req.limit, req.status
        );

        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE ($1::order_status IS NULL OR status = $1)
            ORDER BY id
            OFFSET $2 LIMIT $3
            "#
        );

        sqlx::query_as::<_, OrderModel>(&sql)
            .bind(req.status)
            .bind(req.skip)
            .bind(req.limit)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to list orders: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");

        sqlx::query_as::<_, OrderModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }

    async fn find_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItem>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            r#"
            SELECT {ORDER_ITEM_COLUMNS}
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY order_id, id
            "#
        );

        sqlx::query_as::<_, OrderItem>(&sql)
            .bind(order_ids.to_vec())
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch items for orders {:?}: {:?}", order_ids, e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_statuses(
        &self,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE status = ANY($1)
            ORDER BY created_at, id
            "#
        );

        sqlx::query_as::<_, OrderModel>(&sql)
            .bind(statuses.to_vec())
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders in {:?}: {:?}", statuses, e);
                RepositoryError::from(e)
            })
    }

    async fn find_oldest(
        &self,
        status: OrderStatus,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE status = $1
            ORDER BY created_at, id
            LIMIT 1
            "#
        );

        sqlx::query_as::<_, OrderModel>(&sql)
            .bind(status)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch oldest {} order: {:?}", status, e);
                RepositoryError::from(e)
            })
    }

    async fn find_created_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE created_at >= $1
            ORDER BY created_at, id
            "#
        );

        sqlx::query_as::<_, OrderModel>(&sql)
            .bind(since)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders created since {}: {:?}", since, e);
                RepositoryError::from(e)
            })
    }
}
