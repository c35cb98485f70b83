use super::PRODUCT_COLUMNS;
use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO products (name, price, category, description, stock)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let product = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(&req.name)
            .bind(req.price)
            .bind(&req.category)
            .bind(req.description.as_deref())
            .bind(req.stock)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create product {}: {:?}", req.name, e);
                RepositoryError::from(e)
            })?;

        info!("✅ Created product {} ({})", product.id, product.name);
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE products
            SET name        = COALESCE($2, name),
                price       = COALESCE($3, price),
                category    = COALESCE($4, category),
                description = COALESCE($5, description),
                stock       = COALESCE($6, stock),
                is_active   = COALESCE($7, is_active),
                updated_at  = now()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let product = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .bind(req.name.as_deref())
            .bind(req.price)
            .bind(req.category.as_deref())
            .bind(req.description.as_deref())
            .bind(req.stock)
            .bind(req.is_active)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if product.is_some() {
            info!("🔄 Updated product {}", id);
        }
        Ok(product)
    }

    async fn update_stock(
        &self,
        id: i32,
        stock: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE products
            SET stock = $2, updated_at = now()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let product = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .bind(stock)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to set stock of product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if product.is_some() {
            info!("📦 Product {} stock set to {}", id, stock);
        }
        Ok(product)
    }

    async fn deactivate_product(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🗑️ Deactivating product {}", id);

        let sql = format!(
            r#"
            UPDATE products
            SET is_active = false, updated_at = now()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to deactivate product {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }
}
