use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryRepository, KitchenServiceTrait},
    domain::responses::{KitchenStatsResponse, OrderResponse},
    errors::ServiceError,
    model::OrderStatus,
    service::order::{one_with_items, with_items},
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prometheus_client::registry::Registry;

pub struct KitchenService {
    query: DynOrderQueryRepository,
    orders: DynOrderCommandService,
    metrics: Metrics,
}

pub struct KitchenServiceDeps {
    pub query: DynOrderQueryRepository,
    pub orders: DynOrderCommandService,
}

impl KitchenService {
    pub fn new(deps: KitchenServiceDeps, registry: &mut Registry) -> Self {
        Self {
            query: deps.query,
            orders: deps.orders,
            metrics: Metrics::registered(registry, "kitchen_service", "KitchenService"),
        }
    }
}

#[async_trait]
impl KitchenServiceTrait for KitchenService {
    async fn queue(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let ctx = TracingContext::start("KitchenQueue");
        let failed = |e: &ServiceError| {
            self.metrics
                .complete_error(&ctx, Method::Get, &e.to_string())
        };

        let orders = self
            .query
            .find_by_statuses(&OrderStatus::IN_KITCHEN)
            .await
            .map_err(ServiceError::from)
            .inspect_err(failed)?;
        let orders = with_items(&self.query, orders).await.inspect_err(failed)?;

        self.metrics.complete_success(
            &ctx,
            Method::Get,
            &format!("{} orders in the kitchen", orders.len()),
        );
        Ok(orders)
    }

    async fn next(&self) -> Result<OrderResponse, ServiceError> {
        let ctx = TracingContext::start("KitchenNext");
        let failed = |e: &ServiceError| {
            self.metrics
                .complete_error(&ctx, Method::Get, &e.to_string())
        };

        let oldest = self
            .query
            .find_oldest(OrderStatus::Pending)
            .await
            .map_err(ServiceError::from)
            .and_then(|order| {
                order.ok_or_else(|| ServiceError::NotFound("No pending orders".into()))
            })
            .inspect_err(failed)?;

        let order = one_with_items(&self.query, oldest)
            .await
            .inspect_err(failed)?;
        self.metrics
            .complete_success(&ctx, Method::Get, "Next order fetched");
        Ok(order)
    }

    async fn start_preparation(&self, id: i32) -> Result<OrderResponse, ServiceError> {
        self.orders.transition(id, OrderStatus::InPreparation).await
    }

    async fn complete(&self, id: i32) -> Result<OrderResponse, ServiceError> {
        self.orders.transition(id, OrderStatus::Ready).await
    }

    async fn stats(&self, since: DateTime<Utc>) -> Result<KitchenStatsResponse, ServiceError> {
        let ctx = TracingContext::start("KitchenStats");

        let orders = self
            .query
            .find_created_since(since)
            .await
            .inspect_err(|e| {
                self.metrics
                    .complete_error(&ctx, Method::Get, &e.to_string())
            })?;
        let stats = KitchenStatsResponse::from_orders(&orders);

        self.metrics
            .complete_success(&ctx, Method::Get, "Kitchen stats computed");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{OrderCommandServiceTrait, OrderQueryRepositoryTrait},
        domain::requests::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
        errors::RepositoryError,
        model::{Order, OrderItem},
    };
    use prometheus_client::encoding::text::encode;
    use std::sync::Arc;

    struct DownOrders;

    fn down() -> RepositoryError {
        RepositoryError::Custom("database unavailable".into())
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for DownOrders {
        async fn find_all(&self, _req: &FindAllOrders) -> Result<Vec<Order>, RepositoryError> {
            Err(down())
        }
        async fn find_by_id(&self, _id: i32) -> Result<Option<Order>, RepositoryError> {
            Err(down())
        }
        async fn find_items(&self, _ids: &[i32]) -> Result<Vec<OrderItem>, RepositoryError> {
            Err(down())
        }
        async fn find_by_statuses(
            &self,
            _statuses: &[OrderStatus],
        ) -> Result<Vec<Order>, RepositoryError> {
            Err(down())
        }
        async fn find_oldest(
            &self,
            _status: OrderStatus,
        ) -> Result<Option<Order>, RepositoryError> {
            Err(down())
        }
        async fn find_created_since(
            &self,
            _since: DateTime<Utc>,
        ) -> Result<Vec<Order>, RepositoryError> {
            Err(down())
        }
    }

    struct NoTransitions;

    #[async_trait]
    impl OrderCommandServiceTrait for NoTransitions {
        async fn create_order(
            &self,
            _username: &str,
            _req: &CreateOrderRequest,
        ) -> Result<OrderResponse, ServiceError> {
            Err(ServiceError::Internal("unused".into()))
        }
        async fn update_order(
            &self,
            _id: i32,
            _req: &UpdateOrderRequest,
        ) -> Result<OrderResponse, ServiceError> {
            Err(ServiceError::Internal("unused".into()))
        }
        async fn transition(
            &self,
            _id: i32,
            _to: OrderStatus,
        ) -> Result<OrderResponse, ServiceError> {
            Err(ServiceError::Internal("unused".into()))
        }
    }

    #[tokio::test]
    async fn repository_failures_are_counted_as_errors() {
        let mut registry = Registry::default();
        let kitchen = KitchenService::new(
            KitchenServiceDeps {
                query: Arc::new(DownOrders),
                orders: Arc::new(NoTransitions),
            },
            &mut registry,
        );

        assert!(kitchen.queue().await.is_err());
        assert!(kitchen.next().await.is_err());
        assert!(kitchen.stats(Utc::now()).await.is_err());

        let mut body = String::new();
        encode(&mut body, &registry).unwrap();

        assert!(body.contains(
            "kitchen_service_request_counter_total{method=\"Get\",status=\"Error\"} 3"
        ));
        assert!(!body.contains("status=\"Success\""));
    }
}
