use super::TABLE_COLUMNS;
use crate::{
    abstract_trait::TableCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateTableRequest, UpdateTableRequest},
    errors::RepositoryError,
    model::{Table as TableModel, TableStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct TableCommandRepository {
    db: ConnectionPool,
}

impl TableCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TableCommandRepositoryTrait for TableCommandRepository {
    async fn create_table(&self, req: &CreateTableRequest) -> Result<TableModel, RepositoryError> {
        let sql = format!("INSERT INTO tables (capacity) VALUES ($1) RETURNING {TABLE_COLUMNS}");

        let table = sqlx::query_as::<_, TableModel>(&sql)
            .bind(req.capacity)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create table: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Created table {} (capacity {})", table.id, table.capacity);
        Ok(table)
    }

    async fn update_table(
        &self,
        id: i32,
        req: &UpdateTableRequest,
    ) -> Result<Option<TableModel>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE tables
            SET capacity  = COALESCE($2, capacity),
                status    = COALESCE($3, status),
                is_active = COALESCE($4, is_active)
            WHERE id = $1
            RETURNING {TABLE_COLUMNS}
            "#
        );

        let table = sqlx::query_as::<_, TableModel>(&sql)
            .bind(id)
            .bind(req.capacity)
            .bind(req.status)
            .bind(req.is_active)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update table {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if table.is_some() {
            info!("🔄 Updated table {}", id);
        }
        Ok(table)
    }

    async fn update_status(
        &self,
        id: i32,
        status: TableStatus,
    ) -> Result<Option<TableModel>, RepositoryError> {
        let sql = format!("UPDATE tables SET status = $2 WHERE id = $1 RETURNING {TABLE_COLUMNS}");

        let table = sqlx::query_as::<_, TableModel>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to set status of table {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if table.is_some() {
            info!("🔄 Table {} is now {:?}", id, status);
        }
        Ok(table)
    }

    async fn deactivate_table(&self, id: i32) -> Result<Option<TableModel>, RepositoryError> {
        info!("🗑️ Deactivating table {}", id);

        let sql =
            format!("UPDATE tables SET is_active = false WHERE id = $1 RETURNING {TABLE_COLUMNS}");

        sqlx::query_as::<_, TableModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to deactivate table {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }
}
