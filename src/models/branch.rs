//! Branch model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::member::Member;

/// Branch row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Branch {
    pub id: i32,
    pub branch_name: String,
    pub branch_address: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Branch with its registered members, returned by `GET /branchs/:id`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BranchDetail {
    pub id: i32,
    pub branch_name: String,
    pub branch_address: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub members: Vec<Member>,
}

impl BranchDetail {
    pub fn new(branch: Branch, members: Vec<Member>) -> Self {
        Self {
            id: branch.id,
            branch_name: branch.branch_name,
            branch_address: branch.branch_address,
            created_at: branch.created_at,
            updated_at: branch.updated_at,
            members,
        }
    }
}

/// Create branch request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBranch {
    pub branch_name: Option<String>,
    pub branch_address: Option<String>,
}

/// Update branch request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBranch {
    pub branch_name: Option<String>,
    pub branch_address: Option<String>,
}
