use crate::{
    domain::{
        requests::{CreateTableRequest, UpdateTableRequest},
        responses::TableResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::{Table as TableModel, TableStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTableCommandRepository = Arc<dyn TableCommandRepositoryTrait + Send + Sync>;
pub type DynTableCommandService = Arc<dyn TableCommandServiceTrait + Send + Sync>;

/// Missing rows come back as `Ok(None)`; the service decides what that means.
#[async_trait]
pub trait TableCommandRepositoryTrait {
    async fn create_table(&self, req: &CreateTableRequest) -> Result<TableModel, RepositoryError>;
    async fn update_table(
        &self,
        id: i32,
        req: &UpdateTableRequest,
    ) -> Result<Option<TableModel>, RepositoryError>;
    async fn update_status(
        &self,
        id: i32,
        status: TableStatus,
    ) -> Result<Option<TableModel>, RepositoryError>;
    async fn deactivate_table(&self, id: i32) -> Result<Option<TableModel>, RepositoryError>;
}

#[async_trait]
pub trait TableCommandServiceTrait {
    async fn create_table(&self, req: &CreateTableRequest) -> Result<TableResponse, ServiceError>;
    async fn update_table(
        &self,
        id: i32,
        req: &UpdateTableRequest,
    ) -> Result<TableResponse, ServiceError>;
    async fn update_status(
        &self,
        id: i32,
        status: TableStatus,
    ) -> Result<TableResponse, ServiceError>;
    async fn delete_table(&self, id: i32) -> Result<(), ServiceError>;
}
