//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        ListQuery,
    },
};

use super::{ApiResponse, AuthenticatedStaff};

/// List books with title search and pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated list of books"),
        (status = 404, description = "No books on this page")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Book>>>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(Json(ApiResponse::new("Get books successful", books)))
}

/// Add a new book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = ApiResponse<Book>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Author or publisher not found")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<ApiResponse<Book>>)> {
    let book = state.services.catalog.create_book(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create book successful", book)),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = ApiResponse<Book>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.services.catalog.update_book(id, &data).await?;
    Ok(Json(ApiResponse::new("Update book successful", book)))
}

/// Hard delete a book and its transaction items
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = ApiResponse<Book>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Book>>> {
    state.services.catalog.delete_book(id).await?;
    Ok(Json(ApiResponse::message("Delete book successful")))
}
