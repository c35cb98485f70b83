use super::one_with_items;
use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynUserRepository,
        OrderCommandServiceTrait, StatusChange,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::OrderResponse,
    },
    errors::ServiceError,
    model::{Order, OrderStatus},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tracing::{info, warn};

const NOTES_RETRIES: usize = 3;

pub struct OrderCommandService {
    users: DynUserRepository,
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    metrics: Metrics,
}

impl OrderCommandService {
    pub fn new(
        users: DynUserRepository,
        query: DynOrderQueryRepository,
        command: DynOrderCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            users,
            query,
            command,
            metrics: Metrics::registered(registry, "order_command_service", "OrderCommandService"),
        }
    }

    async fn current(&self, id: i32) -> Result<Order, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".into()))
    }

    /// Moves `order` to `to` if the transition table allows it and nobody
    /// changed the row in between.
    async fn guarded_move(
        &self,
        order: &Order,
        to: OrderStatus,
        notes: Option<String>,
    ) -> Result<Order, ServiceError> {
        let rejected = |from: OrderStatus| ServiceError::InvalidTransition {
            order_id: order.id,
            from,
            to,
        };

        if !order.status.can_transition_to(to) {
            return Err(rejected(order.status));
        }

        let change = StatusChange {
            expected: order.status,
            to: Some(to),
            notes,
        };

        match self.command.apply_change(order.id, &change).await? {
            Some(updated) => Ok(updated),
            None => {
                let latest = self.current(order.id).await?;
                warn!(
                    "⚠️ Order {} moved to {} before {} could be applied",
                    order.id, latest.status, to
                );
                Err(rejected(latest.status))
            }
        }
    }

    async fn set_notes(&self, mut order: Order, notes: String) -> Result<Order, ServiceError> {
        for _ in 0..NOTES_RETRIES {
            let change = StatusChange {
                expected: order.status,
                to: None,
                notes: Some(notes.clone()),
            };

            if let Some(updated) = self.command.apply_change(order.id, &change).await? {
                return Ok(updated);
            }
            order = self.current(order.id).await?;
        }

        Err(ServiceError::Internal(format!(
            "Order {} kept changing while updating notes",
            order.id
        )))
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        username: &str,
        req: &CreateOrderRequest,
    ) -> Result<OrderResponse, ServiceError> {
        info!(
            "🧾 {} places an order on table {} with {} line(s)",
            username,
            req.table_id,
            req.items.len()
        );
        let ctx = TracingContext::start("CreateOrder");

        let Some(user) = self.users.find_by_username(username).await? else {
            self.metrics
                .complete_error(&ctx, Method::Post, "Unknown order creator");
            return Err(ServiceError::Unauthorized(
                "Could not validate credentials".into(),
            ));
        };

        let (order, items) = self
            .command
            .create_order(user.id, req)
            .await
            .inspect_err(|e| {
                self.metrics
                    .complete_error(&ctx, Method::Post, &e.to_string())
            })?;

        self.metrics
            .complete_success(&ctx, Method::Post, "Order created");
        Ok(OrderResponse::from_parts(order, items))
    }

    /// Guarded path: a status different from the current one goes through
    /// the same transition table and compare-and-set as the kitchen routes.
    /// Notes are written as given.
    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError> {
        let ctx = TracingContext::start("UpdateOrder");

        let current = self.current(id).await.inspect_err(|e| {
            self.metrics
                .complete_error(&ctx, Method::Patch, &e.to_string())
        })?;

        let result = match (req.status, req.notes.clone()) {
            (Some(to), notes) if to != current.status => {
                self.guarded_move(&current, to, notes).await
            }
            (_, Some(notes)) => self.set_notes(current, notes).await,
            (_, None) => Ok(current),
        };

        let order = result.inspect_err(|e| {
            self.metrics
                .complete_error(&ctx, Method::Patch, &e.to_string())
        })?;

        self.metrics
            .complete_success(&ctx, Method::Patch, "Order updated");
        one_with_items(&self.query, order).await
    }

    async fn transition(&self, id: i32, to: OrderStatus) -> Result<OrderResponse, ServiceError> {
        let ctx = TracingContext::start("TransitionOrder");

        let result = match self.current(id).await {
            Ok(current) => self.guarded_move(&current, to, None).await,
            Err(e) => Err(e),
        };

        let order = result.inspect_err(|e| {
            self.metrics
                .complete_error(&ctx, Method::Post, &e.to_string())
        })?;

        self.metrics
            .complete_success(&ctx, Method::Post, &format!("Order {id} is now {to}"));
        one_with_items(&self.query, order).await
    }
}
