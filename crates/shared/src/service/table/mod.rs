mod command;
mod query;

use self::command::TableCommandService;
use self::query::TableQueryService;
use crate::{
    abstract_trait::{DynTableCommandService, DynTableQueryService},
    repository::TableRepository,
};
use prometheus_client::registry::Registry;
use std::sync::Arc;

#[derive(Clone)]
pub struct TableService {
    pub query: DynTableQueryService,
    pub command: DynTableCommandService,
}

pub struct TableServiceDeps {
    pub repo: TableRepository,
}

impl TableService {
    pub fn new(deps: TableServiceDeps, registry: &mut Registry) -> Self {
        let query = Arc::new(TableQueryService::new(deps.repo.query.clone(), registry))
            as DynTableQueryService;

        let command = Arc::new(TableCommandService::new(deps.repo.command.clone(), registry))
            as DynTableCommandService;

        Self { query, command }
    }
}
