use crate::{
    domain::{requests::FindAllTables, responses::TableResponse},
    errors::{RepositoryError, ServiceError},
    model::Table as TableModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTableQueryRepository = Arc<dyn TableQueryRepositoryTrait + Send + Sync>;
pub type DynTableQueryService = Arc<dyn TableQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TableQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllTables) -> Result<Vec<TableModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<TableModel>, RepositoryError>;
}

#[async_trait]
pub trait TableQueryServiceTrait {
    async fn find_all(&self, req: &FindAllTables) -> Result<Vec<TableResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<TableResponse, ServiceError>;
}
