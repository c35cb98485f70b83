use super::TABLE_COLUMNS;
use crate::{
    abstract_trait::TableQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllTables, errors::RepositoryError, model::Table as TableModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct TableQueryRepository {
    db: ConnectionPool,
}

impl TableQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TableQueryRepositoryTrait for TableQueryRepository {
    async fn find_all(&self, req: &FindAllTables) -> Result<Vec<TableModel>, RepositoryError> {
        info!(
            "🔍 Listing tables skip={} limit={} include_inactive={}",
            req.skip, req.limit, req.include_inactive
        );

        let sql = format!(
            r#"
            SELECT {TABLE_COLUMNS}
            FROM tables
            WHERE $1 OR is_active
            ORDER BY id
            OFFSET $2 LIMIT $3
            "#
        );

        sqlx::query_as::<_, TableModel>(&sql)
            .bind(req.include_inactive)
            .bind(req.skip)
            .bind(req.limit)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to list tables: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<TableModel>, RepositoryError> {
        let sql = format!("SELECT {TABLE_COLUMNS} FROM tables WHERE id = $1");

        sqlx::query_as::<_, TableModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch table {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }
}
