//! Publisher endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        publisher::{CreatePublisher, Publisher, UpdatePublisher},
        ListQuery,
    },
};

use super::{ApiResponse, AuthenticatedStaff};

/// List publishers with search and pagination
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated list of publishers"),
        (status = 404, description = "No publishers on this page")
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Publisher>>>> {
    let publishers = state.services.catalog.list_publishers(&query).await?;
    Ok(Json(ApiResponse::new(
        "Get publishers successful",
        publishers,
    )))
}

/// Create a new publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    security(("bearer_auth" = [])),
    request_body = CreatePublisher,
    responses(
        (status = 201, description = "Publisher created", body = ApiResponse<Publisher>),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Publisher name already exists")
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreatePublisher>,
) -> AppResult<(StatusCode, Json<ApiResponse<Publisher>>)> {
    let publisher = state.services.catalog.create_publisher(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create publisher successful", publisher)),
    ))
}

/// Update an existing publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Publisher ID")),
    request_body = UpdatePublisher,
    responses(
        (status = 200, description = "Publisher updated", body = ApiResponse<Publisher>),
        (status = 404, description = "Publisher not found"),
        (status = 409, description = "Publisher name already exists")
    )
)]
pub async fn update_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePublisher>,
) -> AppResult<Json<ApiResponse<Publisher>>> {
    let publisher = state.services.catalog.update_publisher(id, &data).await?;
    Ok(Json(ApiResponse::new(
        "Update publisher successful",
        publisher,
    )))
}

/// Hard delete a publisher and their books
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher deleted", body = ApiResponse<Publisher>),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn delete_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Publisher>>> {
    state.services.catalog.delete_publisher(id).await?;
    Ok(Json(ApiResponse::message("Delete publisher successful")))
}
