//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

use super::ApiResponse;

/// Login request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response payload
#[derive(Serialize, ToSchema)]
pub struct LoginData {
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Authenticate a staff account and issue a JWT
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginData>),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(data): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginData>>> {
    let email = data
        .email
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Email is required".to_string()))?;
    let password = data
        .password
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation("Password is required".to_string()))?;

    let (token, staff) = state.services.auth.login(email, password).await?;

    Ok(Json(ApiResponse::new(
        "Login successful",
        LoginData {
            name: staff.staff_name,
            email: staff.staff_email,
            token,
        },
    )))
}
