use super::{ORDER_COLUMNS, ORDER_ITEM_COLUMNS};
use crate::{
    abstract_trait::{OrderCommandRepositoryTrait, StatusChange},
    config::ConnectionPool,
    domain::{OrderDraft, requests::CreateOrderRequest},
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem, Product, Table, TableStatus},
    repository::{product::PRODUCT_COLUMNS, table::TABLE_COLUMNS},
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<(OrderModel, Vec<OrderItem>), RepositoryError> {
        // Dropping `tx` on any early return rolls everything back.
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let table = sqlx::query_as::<_, Table>(&format!(
            "SELECT {TABLE_COLUMNS} FROM tables WHERE id = $1 FOR UPDATE"
        ))
        .bind(req.table_id)
        .fetch_optional(&mut *tx)
        .await?;

        let product_ids: Vec<i32> = req.items.iter().map(|item| item.product_id).collect();

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1) ORDER BY id FOR UPDATE"
        ))
        .bind(product_ids)
        .fetch_all(&mut *tx)
        .await?;

        let draft = OrderDraft::plan(req.table_id, table.as_ref(), &products, &req.items)
            .inspect_err(|reason| {
                warn!("⚠️ Rejected order for table {}: {:?}", req.table_id, reason)
            })?;

        let order = sqlx::query_as::<_, OrderModel>(&format!(
            r#"
            INSERT INTO orders (table_id, user_id, total_amount, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(draft.table_id)
        .bind(user_id)
        .bind(draft.total_amount)
        .bind(req.notes.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order for table {}: {:?}", req.table_id, e);
            RepositoryError::from(e)
        })?;

        let insert_item = format!(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, unit_price, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ORDER_ITEM_COLUMNS}
            "#
        );

        let mut items = Vec::with_capacity(draft.lines.len());
        for line in &draft.lines {
            let item = sqlx::query_as::<_, OrderItem>(&insert_item)
                .bind(order.id)
                .bind(line.product_id)
                .bind(line.quantity)
                .bind(line.unit_price)
                .bind(line.notes.as_deref())
                .fetch_one(&mut *tx)
                .await?;
            items.push(item);
        }

        for (product_id, quantity) in &draft.stock_demand {
            let updated = sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - $2, updated_at = now()
                WHERE id = $1 AND stock >= $2
                "#,
            )
            .bind(product_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;

            if updated.rows_affected() != 1 {
                return Err(RepositoryError::Conflict(format!(
                    "Insufficient stock for product {product_id}"
                )));
            }
        }

        let occupied = sqlx::query("UPDATE tables SET status = $2 WHERE id = $1 AND status = $3")
            .bind(draft.table_id)
            .bind(TableStatus::Occupied)
            .bind(TableStatus::Free)
            .execute(&mut *tx)
            .await?;

        if occupied.rows_affected() != 1 {
            return Err(RepositoryError::Conflict("Table is not available".into()));
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit order for table {}: {:?}", req.table_id, e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created order {} on table {} with {} item(s), total {}",
            order.id,
            order.table_id,
            items.len(),
            order.total_amount
        );

        Ok((order, items))
    }

    async fn apply_change(
        &self,
        id: i32,
        change: &StatusChange,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE orders
            SET status     = COALESCE($3, status),
                notes      = COALESCE($4, notes),
                updated_at = now()
            WHERE id = $1 AND status = $2
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(id)
            .bind(change.expected)
            .bind(change.to)
            .bind(change.notes.as_deref())
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update order {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if let Some(order) = &order {
            info!("🔄 Order {} is now {}", order.id, order.status);
        }
        Ok(order)
    }
}
