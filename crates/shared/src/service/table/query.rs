use crate::{
    abstract_trait::{DynTableQueryRepository, TableQueryServiceTrait},
    domain::{requests::FindAllTables, responses::TableResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct TableQueryService {
    query: DynTableQueryRepository,
    metrics: Metrics,
}

impl TableQueryService {
    pub fn new(query: DynTableQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            metrics: Metrics::registered(registry, "table_query_service", "TableQueryService"),
        }
    }
}

#[async_trait]
impl TableQueryServiceTrait for TableQueryService {
    async fn find_all(&self, req: &FindAllTables) -> Result<Vec<TableResponse>, ServiceError> {
        let ctx = TracingContext::start("FindAllTables");

        let tables = self.query.find_all(req).await.inspect_err(|e| {
            self.metrics.complete_error(&ctx, Method::Get, &e.to_string())
        })?;

        self.metrics.complete_success(
            &ctx,
            Method::Get,
            &format!("Fetched {} tables", tables.len()),
        );
        Ok(tables.into_iter().map(TableResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<TableResponse, ServiceError> {
        let ctx = TracingContext::start("FindTableById");

        match self.query.find_by_id(id).await? {
            Some(table) => {
                self.metrics
                    .complete_success(&ctx, Method::Get, "Table fetched");
                Ok(TableResponse::from(table))
            }
            None => {
                self.metrics
                    .complete_error(&ctx, Method::Get, "Table not found");
                Err(ServiceError::NotFound("Table not found".into()))
            }
        }
    }
}
