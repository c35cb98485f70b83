use crate::middleware::{
    AnyStaff, Authorized, FrontOfHouse, KitchenOnly, SimpleValidatedJson, ValidatedQuery,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
        responses::{OrderResponse, PaymentResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Table unavailable, product unavailable or stock too low"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    caller: Authorized<FrontOfHouse>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(caller.username(), &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(FindAllOrders),
    responses(
        (status = 200, description = "List of orders", body = Vec<OrderResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
    _caller: Authorized<AnyStaff>,
    ValidatedQuery(params): ValidatedQuery<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/kitchen/pending",
    tag = "Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders waiting on or in the kitchen", body = Vec<OrderResponse>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn get_kitchen_pending(
    Extension(service): Extension<DynOrderQueryService>,
    _caller: Authorized<KitchenOnly>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_kitchen_pending().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its items", body = OrderResponse),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    _caller: Authorized<AnyStaff>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Status change not allowed"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    _caller: Authorized<AnyStaff>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}/payments",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Payments recorded for the order", body = Vec<PaymentResponse>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order_payments(
    Extension(service): Extension<DynOrderQueryService>,
    _caller: Authorized<FrontOfHouse>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_payments(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let orders = &app_state.di_container.order_service;

    OpenApiRouter::new()
        .route("/orders", get(get_orders).post(create_order))
        .route("/orders/kitchen/pending", get(get_kitchen_pending))
        .route("/orders/{id}", get(get_order).patch(update_order))
        .route("/orders/{id}/payments", get(get_order_payments))
        .layer(Extension(orders.query.clone()))
        .layer(Extension(orders.command.clone()))
}
