use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{requests::FindAllProducts, responses::ProductResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            metrics: Metrics::registered(registry, "product_query_service", "ProductQueryService"),
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductResponse>, ServiceError> {
        let ctx = TracingContext::start("FindAllProducts");

        let products = self.query.find_all(req).await.inspect_err(|e| {
            self.metrics.complete_error(&ctx, Method::Get, &e.to_string())
        })?;

        self.metrics.complete_success(
            &ctx,
            Method::Get,
            &format!("Fetched {} products", products.len()),
        );
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let ctx = TracingContext::start("FindProductById");

        match self.query.find_by_id(id).await? {
            Some(product) => {
                self.metrics
                    .complete_success(&ctx, Method::Get, "Product fetched");
                Ok(ProductResponse::from(product))
            }
            None => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Product not found");
                Err(ServiceError::NotFound("Product not found".into()))
            }
        }
    }

    async fn find_categories(&self) -> Result<Vec<String>, ServiceError> {
        let ctx = TracingContext::start("FindCategories");

        let categories = self.query.find_categories().await?;

        self.metrics
            .complete_success(&ctx, Method::Get, "Categories fetched");
        Ok(categories)
    }
}
