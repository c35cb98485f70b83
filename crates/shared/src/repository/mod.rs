mod order;
mod payment;
mod product;
mod table;
mod user;

pub use self::order::OrderRepository;
pub use self::payment::PaymentRepository;
pub use self::product::ProductRepository;
pub use self::table::TableRepository;
pub use self::user::UserRepository;

use crate::{
    abstract_trait::{DynPaymentRepository, DynUserRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

/// Every repository the services need, behind their trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub user: DynUserRepository,
    pub table: TableRepository,
    pub product: ProductRepository,
    pub order: OrderRepository,
    pub payment: DynPaymentRepository,
}

impl Repositories {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            user: Arc::new(UserRepository::new(pool.clone())) as DynUserRepository,
            table: TableRepository::new(pool.clone()),
            product: ProductRepository::new(pool.clone()),
            order: OrderRepository::new(pool.clone()),
            payment: Arc::new(PaymentRepository::new(pool)) as DynPaymentRepository,
        }
    }
}
