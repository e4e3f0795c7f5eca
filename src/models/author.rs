//! Author model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub author_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create author request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub author_name: Option<String>,
}

/// Update author request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub author_name: Option<String>,
}
