use crate::middleware::{Authorized, KitchenOnly, KitchenOrAdmin};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, Local, Utc};
use shared::{
    abstract_trait::DynKitchenService,
    domain::responses::{KitchenStatsResponse, OrderResponse},
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Start of the current day in server local time.
fn local_midnight() -> DateTime<Utc> {
    let now = Local::now();

    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(|midnight| midnight.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}

#[utoipa::path(
    get,
    path = "/kitchen/orders/queue",
    tag = "Kitchen",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pending and in-preparation orders, oldest first", body = Vec<OrderResponse>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn get_queue(
    Extension(service): Extension<DynKitchenService>,
    _caller: Authorized<KitchenOnly>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.queue().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/kitchen/orders/next",
    tag = "Kitchen",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Oldest pending order", body = OrderResponse),
        (status = 404, description = "No pending orders")
    )
)]
pub async fn get_next(
    Extension(service): Extension<DynKitchenService>,
    _caller: Authorized<KitchenOnly>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.next().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/kitchen/orders/{id}/start",
    tag = "Kitchen",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order moved to in_preparation", body = OrderResponse),
        (status = 400, description = "Order is not pending"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn start_preparation(
    Extension(service): Extension<DynKitchenService>,
    _caller: Authorized<KitchenOnly>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.start_preparation(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/kitchen/orders/{id}/complete",
    tag = "Kitchen",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order marked ready", body = OrderResponse),
        (status = 400, description = "Order is not in preparation"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn complete_order(
    Extension(service): Extension<DynKitchenService>,
    _caller: Authorized<KitchenOnly>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.complete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/kitchen/orders/stats",
    tag = "Kitchen",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts for orders created today", body = KitchenStatsResponse),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn get_stats(
    Extension(service): Extension<DynKitchenService>,
    _caller: Authorized<KitchenOrAdmin>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.stats(local_midnight()).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn kitchen_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/kitchen/orders/queue", get(get_queue))
        .route("/kitchen/orders/next", get(get_next))
        .route("/kitchen/orders/stats", get(get_stats))
        .route("/kitchen/orders/{id}/start", post(start_preparation))
        .route("/kitchen/orders/{id}/complete", post(complete_order))
        .layer(Extension(app_state.di_container.kitchen_service.clone()))
}
