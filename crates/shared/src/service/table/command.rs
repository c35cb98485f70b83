use crate::{
    abstract_trait::{DynTableCommandRepository, TableCommandServiceTrait},
    domain::{
        requests::{CreateTableRequest, UpdateTableRequest},
        responses::TableResponse,
    },
    errors::ServiceError,
    model::{Table, TableStatus},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct TableCommandService {
    command: DynTableCommandRepository,
    metrics: Metrics,
}

impl TableCommandService {
    pub fn new(command: DynTableCommandRepository, registry: &mut Registry) -> Self {
        Self {
            command,
            metrics: Metrics::registered(registry, "table_command_service", "TableCommandService"),
        }
    }

    fn found(
        &self,
        ctx: &TracingContext,
        method: Method,
        table: Option<Table>,
        message: &str,
    ) -> Result<TableResponse, ServiceError> {
        match table {
            Some(table) => {
                self.metrics.complete_success(ctx, method, message);
                Ok(TableResponse::from(table))
            }
            None => {
                self.metrics.complete_error(ctx, method, "Table not found");
                Err(ServiceError::NotFound("Table not found".into()))
            }
        }
    }
}

#[async_trait]
impl TableCommandServiceTrait for TableCommandService {
    async fn create_table(&self, req: &CreateTableRequest) -> Result<TableResponse, ServiceError> {
        let ctx = TracingContext::start("CreateTable");

        let table = self.command.create_table(req).await.inspect_err(|e| {
            self.metrics.complete_error(&ctx, Method::Post, &e.to_string())
        })?;

        self.metrics
            .complete_success(&ctx, Method::Post, "Table created");
        Ok(TableResponse::from(table))
    }

    async fn update_table(
        &self,
        id: i32,
        req: &UpdateTableRequest,
    ) -> Result<TableResponse, ServiceError> {
        let ctx = TracingContext::start("UpdateTable");

        let table = self.command.update_table(id, req).await?;
        self.found(&ctx, Method::Patch, table, "Table updated")
    }

    async fn update_status(
        &self,
        id: i32,
        status: TableStatus,
    ) -> Result<TableResponse, ServiceError> {
        let ctx = TracingContext::start("UpdateTableStatus");

        let table = self.command.update_status(id, status).await?;
        self.found(&ctx, Method::Patch, table, "Table status updated")
    }

    async fn delete_table(&self, id: i32) -> Result<(), ServiceError> {
        let ctx = TracingContext::start("DeleteTable");

        let table = self.command.deactivate_table(id).await?;
        self.found(&ctx, Method::Delete, table, "Table deactivated")
            .map(|_| ())
    }
}
