//! Member endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        member::{CreateMember, Member, UpdateMember},
        ListQuery,
    },
};

use super::{ApiResponse, AuthenticatedStaff};

/// List members with search and pagination
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated list of members"),
        (status = 404, description = "No members on this page")
    )
)]
pub async fn list_members(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Member>>>> {
    let members = state.services.members.list(&query).await?;
    Ok(Json(ApiResponse::new("Get members successful", members)))
}

/// Register a new member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    security(("bearer_auth" = [])),
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = ApiResponse<Member>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Branch not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<ApiResponse<Member>>)> {
    let member = state.services.members.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create member successful", member)),
    ))
}

/// Update an existing member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = ApiResponse<Member>),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMember>,
) -> AppResult<Json<ApiResponse<Member>>> {
    let member = state.services.members.update(id, &data).await?;
    Ok(Json(ApiResponse::new("Update member successful", member)))
}

/// Hard delete a member with their transactions
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = ApiResponse<Member>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Member>>> {
    state.services.members.delete(id).await?;
    Ok(Json(ApiResponse::message("Delete member successful")))
}
