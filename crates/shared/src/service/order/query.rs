use super::{one_with_items, with_items};
use crate::{
    abstract_trait::{DynOrderQueryRepository, DynPaymentRepository, OrderQueryServiceTrait},
    domain::{
        requests::FindAllOrders,
        responses::{OrderResponse, PaymentResponse},
    },
    errors::ServiceError,
    model::OrderStatus,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    payments: DynPaymentRepository,
    metrics: Metrics,
}

impl OrderQueryService {
    pub fn new(
        query: DynOrderQueryRepository,
        payments: DynPaymentRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            payments,
            metrics: Metrics::registered(registry, "order_query_service", "OrderQueryService"),
        }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderResponse>, ServiceError> {
        let ctx = TracingContext::start("FindAllOrders");
        let failed = |e: &ServiceError| {
            self.metrics
                .complete_error(&ctx, Method::Get, &e.to_string())
        };

        let orders = self
            .query
            .find_all(req)
            .await
            .map_err(ServiceError::from)
            .inspect_err(failed)?;
        let orders = with_items(&self.query, orders).await.inspect_err(failed)?;

        self.metrics.complete_success(
            &ctx,
            Method::Get,
            &format!("Fetched {} orders", orders.len()),
        );
        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<OrderResponse, ServiceError> {
        let ctx = TracingContext::start("FindOrderById");
        let failed = |e: &ServiceError| {
            self.metrics
                .complete_error(&ctx, Method::Get, &e.to_string())
        };

        let order = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::from)
            .and_then(|order| order.ok_or_else(|| ServiceError::NotFound("Order not found".into())))
            .inspect_err(failed)?;

        let order = one_with_items(&self.query, order)
            .await
            .inspect_err(failed)?;
        self.metrics
            .complete_success(&ctx, Method::Get, "Order fetched");
        Ok(order)
    }

    async fn find_kitchen_pending(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let ctx = TracingContext::start("FindKitchenPending");
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

        self.metrics
            .complete_success(&ctx, Method::Get, "Kitchen orders fetched");
        Ok(orders)
    }

    async fn find_payments(&self, order_id: i32) -> Result<Vec<PaymentResponse>, ServiceError> {
        let ctx = TracingContext::start("FindOrderPayments");
        let failed = |e: &ServiceError| {
            self.metrics
                .complete_error(&ctx, Method::Get, &e.to_string())
        };

        self.query
            .find_by_id(order_id)
            .await
            .map_err(ServiceError::from)
            .and_then(|order| order.ok_or_else(|| ServiceError::NotFound("Order not found".into())))
            .inspect_err(failed)?;

        let payments = self
            .payments
            .find_by_order(order_id)
            .await
            .map_err(ServiceError::from)
            .inspect_err(failed)?;

        self.metrics
            .complete_success(&ctx, Method::Get, "Payments fetched");
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }
}
