//! Publisher model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Publisher row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: i32,
    pub publisher_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create publisher request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublisher {
    pub publisher_name: Option<String>,
}

/// Update publisher request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePublisher {
    pub publisher_name: Option<String>,
}
