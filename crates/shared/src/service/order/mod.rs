mod command;
mod query;

use self::command::OrderCommandService;
use self::query::OrderQueryService;
use crate::{
    abstract_trait::{
        DynOrderCommandService, DynOrderQueryRepository, DynOrderQueryService,
        DynPaymentRepository, DynUserRepository,
    },
    domain::responses::OrderResponse,
    errors::ServiceError,
    model::{Order, OrderItem},
    repository::OrderRepository,
};
use prometheus_client::registry::Registry;
use std::{collections::HashMap, sync::Arc};

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

pub struct OrderServiceDeps {
    pub repo: OrderRepository,
    pub users: DynUserRepository,
    pub payments: DynPaymentRepository,
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps, registry: &mut Registry) -> Self {
        let OrderServiceDeps {
            repo,
            users,
            payments,
        } = deps;

        let query = Arc::new(OrderQueryService::new(repo.query.clone(), payments, registry))
            as DynOrderQueryService;

        let command = Arc::new(OrderCommandService::new(
            users,
            repo.query.clone(),
            repo.command.clone(),
            registry,
        )) as DynOrderCommandService;

        Self { query, command }
    }
}

/// Attaches each order's items, keeping the order of `orders`.
pub(crate) async fn with_items(
    query: &DynOrderQueryRepository,
    orders: Vec<Order>,
) -> Result<Vec<OrderResponse>, ServiceError> {
    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    let items = query.find_items(&ids).await?;

    let mut by_order: HashMap<i32, Vec<OrderItem>> = HashMap::new();
    for item in items {
        by_order.entry(item.order_id).or_default().push(item);
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let items = by_order.remove(&order.id).unwrap_or_default();
            OrderResponse::from_parts(order, items)
        })
        .collect())
}

pub(crate) async fn one_with_items(
    query: &DynOrderQueryRepository,
    order: Order,
) -> Result<OrderResponse, ServiceError> {
    let items = query.find_items(&[order.id]).await?;
    Ok(OrderResponse::from_parts(order, items))
}
