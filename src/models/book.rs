//! Book model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub author_id: i32,
    pub publisher_id: i32,
    pub title: String,
    pub publish_year: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub author_id: Option<i32>,
    pub publisher_id: Option<i32>,
    pub title: Option<String>,
    pub publish_year: Option<i32>,
}

/// Update book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub author_id: Option<i32>,
    pub publisher_id: Option<i32>,
    pub title: Option<String>,
    pub publish_year: Option<i32>,
}
