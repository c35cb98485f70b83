use crate::middleware::{
    AdminOnly, AnyStaff, Authorized, SimpleValidatedJson, StockKeepers, ValidatedQuery,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{
            CreateProductRequest, FindAllProducts, UpdateProductRequest, UpdateStockRequest,
        },
        responses::ProductResponse,
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(FindAllProducts),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    _caller: Authorized<AnyStaff>,
    ValidatedQuery(params): ValidatedQuery<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/categories",
    tag = "Product",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Distinct product categories, sorted", body = Vec<String>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynProductQueryService>,
    _caller: Authorized<AnyStaff>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_categories().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    _caller: Authorized<AnyStaff>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    _caller: Authorized<AdminOnly>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    _caller: Authorized<AdminOnly>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_product(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/products/{id}/stock",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Stock set", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product_stock(
    Extension(service): Extension<DynProductCommandService>,
    _caller: Authorized<StockKeepers>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateStockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_stock(id, body.stock).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deactivated"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    _caller: Authorized<AdminOnly>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let products = &app_state.di_container.product_service;

    OpenApiRouter::new()
        .route("/products", get(get_products).post(create_product))
        .route("/products/categories", get(get_categories))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/products/{id}/stock", patch(update_product_stock))
        .layer(Extension(products.query.clone()))
        .layer(Extension(products.command.clone()))
}
