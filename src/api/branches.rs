//! Branch endpoints
//!
//! Branch mutations are restricted to the admin role.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        branch::{Branch, BranchDetail, CreateBranch, UpdateBranch},
        ListQuery,
    },
};

use super::{ApiResponse, AuthenticatedStaff};

/// List branches with search and pagination
#[utoipa::path(
    get,
    path = "/branchs",
    tag = "branches",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated list of branches"),
        (status = 404, description = "No branches on this page")
    )
)]
pub async fn list_branches(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Branch>>>> {
    let branches = state.services.branches.list(&query).await?;
    Ok(Json(ApiResponse::new("Get branches successful", branches)))
}

/// Get branch details with nested members
#[utoipa::path(
    get,
    path = "/branchs/{id}",
    tag = "branches",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch with members", body = ApiResponse<BranchDetail>),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn get_branch(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<BranchDetail>>> {
    let branch = state.services.branches.get_detail(id).await?;
    Ok(Json(ApiResponse::new("Get branch successful", branch)))
}

/// Create a new branch (admin only)
#[utoipa::path(
    post,
    path = "/branchs",
    tag = "branches",
    security(("bearer_auth" = [])),
    request_body = CreateBranch,
    responses(
        (status = 201, description = "Branch created", body = ApiResponse<Branch>),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin privileges required"),
        (status = 409, description = "Branch name already exists")
    )
)]
pub async fn create_branch(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(data): Json<CreateBranch>,
) -> AppResult<(StatusCode, Json<ApiResponse<Branch>>)> {
    claims.require_admin()?;

    let branch = state.services.branches.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create branch successful", branch)),
    ))
}

/// Update an existing branch (admin only)
#[utoipa::path(
    put,
    path = "/branchs/{id}",
    tag = "branches",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Branch ID")),
    request_body = UpdateBranch,
    responses(
        (status = 200, description = "Branch updated", body = ApiResponse<Branch>),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn update_branch(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBranch>,
) -> AppResult<Json<ApiResponse<Branch>>> {
    claims.require_admin()?;

    let branch = state.services.branches.update(id, &data).await?;
    Ok(Json(ApiResponse::new("Update branch successful", branch)))
}

/// Hard delete a branch and everything registered under it (admin only)
#[utoipa::path(
    delete,
    path = "/branchs/{id}",
    tag = "branches",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch deleted", body = ApiResponse<Branch>),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn delete_branch(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Branch>>> {
    claims.require_admin()?;

    state.services.branches.delete(id).await?;
    Ok(Json(ApiResponse::message("Delete branch successful")))
}
