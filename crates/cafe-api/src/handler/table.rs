use crate::middleware::{
    AdminOnly, AnyStaff, Authorized, FrontOfHouse, SimpleValidatedJson, ValidatedQuery,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::{DynTableCommandService, DynTableQueryService},
    domain::{
        requests::{
            CreateTableRequest, FindAllTables, UpdateTableRequest, UpdateTableStatusRequest,
        },
        responses::TableResponse,
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/tables",
    tag = "Table",
    security(("bearer_auth" = [])),
    params(FindAllTables),
    responses(
        (status = 200, description = "List of tables", body = Vec<TableResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_tables(
    Extension(service): Extension<DynTableQueryService>,
    _caller: Authorized<AnyStaff>,
    ValidatedQuery(params): ValidatedQuery<FindAllTables>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/tables/{id}",
    tag = "Table",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Table details", body = TableResponse),
        (status = 404, description = "Table not found")
    )
)]
pub async fn get_table(
    Extension(service): Extension<DynTableQueryService>,
    _caller: Authorized<AnyStaff>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/tables",
    tag = "Table",
    security(("bearer_auth" = [])),
    request_body = CreateTableRequest,
    responses(
        (status = 201, description = "Table created", body = TableResponse),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_table(
    Extension(service): Extension<DynTableCommandService>,
    _caller: Authorized<AdminOnly>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateTableRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_table(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/tables/{id}",
    tag = "Table",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Table ID")),
    request_body = UpdateTableRequest,
    responses(
        (status = 200, description = "Table updated", body = TableResponse),
        (status = 404, description = "Table not found")
    )
)]
pub async fn update_table(
    Extension(service): Extension<DynTableCommandService>,
    _caller: Authorized<AdminOnly>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateTableRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_table(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/tables/{id}/status",
    tag = "Table",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Table ID")),
    request_body = UpdateTableStatusRequest,
    responses(
        (status = 200, description = "Table status changed", body = TableResponse),
        (status = 404, description = "Table not found")
    )
)]
pub async fn update_table_status(
    Extension(service): Extension<DynTableCommandService>,
    _caller: Authorized<FrontOfHouse>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateTableStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(id, body.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/tables/{id}",
    tag = "Table",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 204, description = "Table deactivated"),
        (status = 404, description = "Table not found")
    )
)]
pub async fn delete_table(
    Extension(service): Extension<DynTableCommandService>,
    _caller: Authorized<AdminOnly>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_table(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn table_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let tables = &app_state.di_container.table_service;

    OpenApiRouter::new()
        .route("/tables", get(get_tables).post(create_table))
        .route(
            "/tables/{id}",
            get(get_table).patch(update_table).delete(delete_table),
        )
        .route("/tables/{id}/status", patch(update_table_status))
        .layer(Extension(tables.query.clone()))
        .layer(Extension(tables.command.clone()))
}
