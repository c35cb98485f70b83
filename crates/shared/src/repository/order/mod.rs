mod command;
mod query;

use std::sync::Arc;

use self::command::OrderCommandRepository;
use self::query::OrderQueryRepository;

use crate::{
    abstract_trait::{DynOrderCommandRepository, DynOrderQueryRepository},
    config::ConnectionPool,
};

pub(crate) const ORDER_COLUMNS: &str =
    "id, table_id, user_id, status, total_amount, payment_status, notes, created_at, updated_at";

pub(crate) const ORDER_ITEM_COLUMNS: &str =
    "id, order_id, product_id, quantity, unit_price, notes, created_at";

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;

        let command =
            Arc::new(OrderCommandRepository::new(pool.clone())) as DynOrderCommandRepository;

        Self { query, command }
    }
}
