//! Staff endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        staff::{CreateStaff, Staff, UpdateStaff},
        ListQuery,
    },
};

use super::{ApiResponse, AuthenticatedStaff};

/// List staff with search and pagination
#[utoipa::path(
    get,
    path = "/staffs",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated list of staff"),
        (status = 404, description = "No staff on this page")
    )
)]
pub async fn list_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Staff>>>> {
    let staff = state.services.staff.list(&query).await?;
    Ok(Json(ApiResponse::new("Get staff successful", staff)))
}

/// Create a new staff account
#[utoipa::path(
    post,
    path = "/staffs",
    tag = "staff",
    security(("bearer_auth" = [])),
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff created", body = ApiResponse<Staff>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Branch not found"),
        (status = 409, description = "Staff email already exists")
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<ApiResponse<Staff>>)> {
    let staff = state.services.staff.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create staff successful", staff)),
    ))
}

/// Update an existing staff account
#[utoipa::path(
    put,
    path = "/staffs/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Staff ID")),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Staff updated", body = ApiResponse<Staff>),
        (status = 404, description = "Staff not found"),
        (status = 409, description = "Staff email already exists")
    )
)]
pub async fn update_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateStaff>,
) -> AppResult<Json<ApiResponse<Staff>>> {
    let staff = state.services.staff.update(id, &data).await?;
    Ok(Json(ApiResponse::new("Update staff successful", staff)))
}

/// Hard delete a staff account with its schedules and transactions
#[utoipa::path(
    delete,
    path = "/staffs/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff deleted", body = ApiResponse<Staff>),
        (status = 404, description = "Staff not found")
    )
)]
pub async fn delete_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Staff>>> {
    state.services.staff.delete(id).await?;
    Ok(Json(ApiResponse::message("Delete staff successful")))
}
