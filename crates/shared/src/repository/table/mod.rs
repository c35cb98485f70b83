mod command;
mod query;

use std::sync::Arc;

use self::command::TableCommandRepository;
use self::query::TableQueryRepository;

use crate::{
    abstract_trait::{DynTableCommandRepository, DynTableQueryRepository},
    config::ConnectionPool,
};

pub(crate) const TABLE_COLUMNS: &str = "id, status, capacity, is_active, created_at";

#[derive(Clone)]
pub struct TableRepository {
    pub query: DynTableQueryRepository,
    pub command: DynTableCommandRepository,
}

impl TableRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(TableQueryRepository::new(pool.clone())) as DynTableQueryRepository;

        let command =
            Arc::new(TableCommandRepository::new(pool.clone())) as DynTableCommandRepository;

        Self { query, command }
    }
}
