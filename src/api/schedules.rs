//! Schedule endpoints (weekly staff shifts)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::schedule::{CreateSchedule, Schedule, ScheduleQuery},
};

use super::{ApiResponse, AuthenticatedStaff};

/// List schedules, optionally filtered by staff
#[utoipa::path(
    get,
    path = "/schedules",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(ScheduleQuery),
    responses(
        (status = 200, description = "List of schedules"),
        (status = 404, description = "No schedules found")
    )
)]
pub async fn list_schedules(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ScheduleQuery>,
) -> AppResult<Json<ApiResponse<Vec<Schedule>>>> {
    let schedules = state.services.schedules.list(&query).await?;
    Ok(Json(ApiResponse::new("Get schedules successful", schedules)))
}

/// Create a schedule entry for a staff account
#[utoipa::path(
    post,
    path = "/schedules",
    tag = "schedules",
    security(("bearer_auth" = [])),
    request_body = CreateSchedule,
    responses(
        (status = 201, description = "Schedule created", body = ApiResponse<Schedule>),
        (status = 400, description = "Invalid day or time range"),
        (status = 404, description = "Staff not found")
    )
)]
pub async fn create_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateSchedule>,
) -> AppResult<(StatusCode, Json<ApiResponse<Schedule>>)> {
    let schedule = state.services.schedules.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Create schedule successful", schedule)),
    ))
}

/// Hard delete a schedule entry
#[utoipa::path(
    delete,
    path = "/schedules/{id}",
    tag = "schedules",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Schedule deleted", body = ApiResponse<Schedule>),
        (status = 404, description = "Schedule not found")
    )
)]
pub async fn delete_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Schedule>>> {
    state.services.schedules.delete(id).await?;
    Ok(Json(ApiResponse::message("Delete schedule successful")))
}
