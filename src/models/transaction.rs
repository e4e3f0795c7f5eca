//! Borrow transaction models (transaction + per-book items)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Borrowed,
    Returned,
    Late,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Borrowed => "borrowed",
            TransactionStatus::Returned => "returned",
            TransactionStatus::Late => "late",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "borrowed" => Ok(TransactionStatus::Borrowed),
            "returned" => Ok(TransactionStatus::Returned),
            "late" => Ok(TransactionStatus::Late),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for TransactionStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for TransactionStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for TransactionStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Transaction row: one borrow record linking staff, member and branch
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transaction {
    pub id: Uuid,
    pub staff_id: i32,
    pub member_id: i32,
    pub branch_id: i32,
    pub status: TransactionStatus,
    pub deadline_at: DateTime<Utc>,
    #[schema(value_type = Option<f64>)]
    pub total_fine: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Transaction item row: one borrowed book within a transaction
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TransactionItem {
    pub id: Uuid,
    pub transaction_id: Uuid,
    pub book_id: i32,
    pub transaction_item_note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Create transaction request; deadline as RFC 3339 string
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransaction {
    pub staff_id: Option<i32>,
    pub member_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub status: Option<String>,
    pub deadline_at: Option<String>,
}

/// Update transaction request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTransaction {
    pub status: Option<String>,
    pub deadline_at: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub total_fine: Option<Decimal>,
}

/// Add a book to a transaction
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransactionItem {
    pub transaction_id: Option<Uuid>,
    pub book_id: Option<i32>,
    pub transaction_item_note: Option<String>,
}

/// Query parameters for listing transactions
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransactionQuery {
    /// Filter by status (borrowed, returned, late)
    pub status: Option<String>,
    /// Page number, 1-based (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 10)
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values_only() {
        assert_eq!(
            "borrowed".parse::<TransactionStatus>().unwrap(),
            TransactionStatus::Borrowed
        );
        assert_eq!(
            "Late".parse::<TransactionStatus>().unwrap(),
            TransactionStatus::Late
        );
        assert!("overdue".parse::<TransactionStatus>().is_err());
    }
}
