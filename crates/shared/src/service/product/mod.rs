mod command;
mod query;

use self::command::ProductCommandService;
use self::query::ProductQueryService;
use crate::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    repository::ProductRepository,
};
use prometheus_client::registry::Registry;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

pub struct ProductServiceDeps {
    pub repo: ProductRepository,
}

impl ProductService {
    pub fn new(deps: ProductServiceDeps, registry: &mut Registry) -> Self {
        let query = Arc::new(ProductQueryService::new(deps.repo.query.clone(), registry))
            as DynProductQueryService;

        let command = Arc::new(ProductCommandService::new(deps.repo.command.clone(), registry))
            as DynProductCommandService;

        Self { query, command }
    }
}
