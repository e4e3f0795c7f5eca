//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        ListQuery,
    },
};

use super::{ApiResponse, AuthenticatedStaff};

/// List authors with search and pagination
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated list of authors"),
        (status = 404, description = "No authors on this page"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Author>>>> {
    let authors = state.services.catalog.list_authors(&query).await?;
    Ok(Json(ApiResponse::new("Get authors successful", authors)))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = ApiResponse<Author>),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<ApiResponse<Author>>)> {
    let author = state.services.catalog.create_author(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create author successful", author)),
    ))
}

/// Update an existing author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = ApiResponse<Author>),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateAuthor>,
) -> AppResult<Json<ApiResponse<Author>>> {
    let author = state.services.catalog.update_author(id, &data).await?;
    Ok(Json(ApiResponse::new("Update author successful", author)))
}

/// Hard delete an author and their books
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted", body = ApiResponse<Author>),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Author>>> {
    state.services.catalog.delete_author(id).await?;
    Ok(Json(ApiResponse::message("Delete author successful")))
}
