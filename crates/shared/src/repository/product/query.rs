use super::PRODUCT_COLUMNS;
use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllProducts, errors::RepositoryError, model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductModel>, RepositoryError> {
        info!(
            "🔍 Listing products skip={} limit={} category={:?} active_only={}",
            req.skip, req.limit, req.category, req.active_only
        );

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE (NOT $1 OR is_active)
              AND ($2::text IS NULL OR category = $2)
            ORDER BY id
            OFFSET $3 LIMIT $4
            "#
        );

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(req.active_only)
            .bind(req.category.as_deref())
            .bind(req.skip)
            .bind(req.limit)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to list products: {:?}", e);
                RepositoryError::from(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }

    async fn find_categories(&self) -> Result<Vec<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM products ORDER BY category")
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to list categories: {:?}", e);
                RepositoryError::from(e)
            })
    }
}
