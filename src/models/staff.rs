//! Staff model, roles and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Librarian,
    Staff,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Librarian => "librarian",
            StaffRole::Staff => "staff",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(StaffRole::Admin),
            "librarian" => Ok(StaffRole::Librarian),
            "staff" => Ok(StaffRole::Staff),
            _ => Err(format!("Invalid staff role: {}", s)),
        }
    }
}

// SQLx conversion: roles are stored as plain text
impl sqlx::Type<Postgres> for StaffRole {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for StaffRole {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for StaffRole {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Staff row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Staff {
    pub id: i32,
    pub branch_id: i32,
    pub staff_name: String,
    pub staff_email: String,
    pub staff_role: StaffRole,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStaff {
    pub branch_id: Option<i32>,
    pub staff_name: Option<String>,
    #[validate(email(message = "Invalid staff email format"))]
    pub staff_email: Option<String>,
    pub staff_role: Option<String>,
    pub password: Option<String>,
}

/// Update staff request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStaff {
    pub branch_id: Option<i32>,
    pub staff_name: Option<String>,
    #[validate(email(message = "Invalid staff email format"))]
    pub staff_email: Option<String>,
    pub staff_role: Option<String>,
    pub password: Option<String>,
}

/// JWT claims for an authenticated staff account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffClaims {
    pub sub: String,
    pub staff_id: i32,
    pub name: String,
    pub role: StaffRole,
    pub exp: i64,
    pub iat: i64,
}

impl StaffClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_admin(&self) -> bool {
        self.role == StaffRole::Admin
    }

    /// Require the admin role
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!("Admin".parse::<StaffRole>().unwrap(), StaffRole::Admin);
        assert_eq!("librarian".parse::<StaffRole>().unwrap(), StaffRole::Librarian);
        assert!("manager".parse::<StaffRole>().is_err());
    }

    #[test]
    fn claims_round_trip_through_token() {
        let claims = StaffClaims {
            sub: "alice@example.org".to_string(),
            staff_id: 7,
            name: "Alice".to_string(),
            role: StaffRole::Librarian,
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
        };
        let token = claims.create_token("test-secret").unwrap();
        let decoded = StaffClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.staff_id, 7);
        assert_eq!(decoded.sub, "alice@example.org");
        assert_eq!(decoded.role, StaffRole::Librarian);
    }

    #[test]
    fn tampered_secret_is_rejected() {
        let claims = StaffClaims {
            sub: "alice@example.org".to_string(),
            staff_id: 7,
            name: "Alice".to_string(),
            role: StaffRole::Admin,
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
        };
        let token = claims.create_token("test-secret").unwrap();
        assert!(StaffClaims::from_token(&token, "other-secret").is_err());
    }

    #[test]
    fn only_admin_passes_admin_gate() {
        let mut claims = StaffClaims {
            sub: "bob@example.org".to_string(),
            staff_id: 1,
            name: "Bob".to_string(),
            role: StaffRole::Staff,
            exp: 0,
            iat: 0,
        };
        assert!(claims.require_admin().is_err());
        claims.role = StaffRole::Admin;
        assert!(claims.require_admin().is_ok());
    }
}
