use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::ProductResponse,
    },
    errors::ServiceError,
    model::Product,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        Self {
            command,
            metrics: Metrics::registered(
                registry,
                "product_command_service",
                "ProductCommandService",
            ),
        }
    }

    fn found(
        &self,
        ctx: &TracingContext,
        method: Method,
        product: Option<Product>,
        message: &str,
    ) -> Result<ProductResponse, ServiceError> {
        match product {
            Some(product) => {
                self.metrics.complete_success(ctx, method, message);
                Ok(ProductResponse::from(product))
            }
            None => {
                self.metrics.complete_error(ctx, method, "Product not found");
                Err(ServiceError::NotFound("Product not found".into()))
            }
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let ctx = TracingContext::start("CreateProduct");

        let product = self.command.create_product(req).await.inspect_err(|e| {
            self.metrics.complete_error(&ctx, Method::Post, &e.to_string())
        })?;

        self.metrics
            .complete_success(&ctx, Method::Post, "Product created");
        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let ctx = TracingContext::start("UpdateProduct");

        let product = self.command.update_product(id, req).await?;
        self.found(&ctx, Method::Patch, product, "Product updated")
    }

    async fn update_stock(&self, id: i32, stock: i32) -> Result<ProductResponse, ServiceError> {
        let ctx = TracingContext::start("UpdateProductStock");

        let product = self.command.update_stock(id, stock).await?;
        self.found(&ctx, Method::Patch, product, "Stock updated")
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        let ctx = TracingContext::start("DeleteProduct");

        let product = self.command.deactivate_product(id).await?;
        self.found(&ctx, Method::Delete, product, "Product deactivated")
            .map(|_| ())
    }
}
