//! Transactions repository for database operations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::transaction::{
        Transaction, TransactionItem, TransactionQuery, TransactionStatus,
    },
};

#[derive(Clone)]
pub struct TransactionsRepository {
    pool: Pool<Postgres>,
}

impl TransactionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List transactions with optional status filter and pagination
    pub async fn list(&self, query: &TransactionQuery) -> AppResult<Vec<Transaction>> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(10).max(1);
        let offset = (page - 1) * limit;

        let rows = match query.status {
            Some(ref status) => {
                sqlx::query_as::<_, Transaction>(
                    r#"
                    SELECT * FROM transactions
                    WHERE status = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(status.to_lowercase())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Transaction>(
                    "SELECT * FROM transactions ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    /// Get transaction by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Transaction> {
        sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))
    }

    /// Create a transaction
    pub async fn create(
        &self,
        staff_id: i32,
        member_id: i32,
        branch_id: i32,
        status: TransactionStatus,
        deadline_at: DateTime<Utc>,
    ) -> AppResult<Transaction> {
        let row = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (staff_id, member_id, branch_id, status, deadline_at, total_fine)
            VALUES ($1, $2, $3, $4, $5, NULL)
            RETURNING *
            "#,
        )
        .bind(staff_id)
        .bind(member_id)
        .bind(branch_id)
        .bind(status)
        .bind(deadline_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update status, deadline or fine on a transaction
    pub async fn update(
        &self,
        id: Uuid,
        status: Option<TransactionStatus>,
        deadline_at: Option<DateTime<Utc>>,
        total_fine: Option<Decimal>,
    ) -> AppResult<Transaction> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($cond:expr, $name:expr) => {
                if $cond {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(status.is_some(), "status");
        add_field!(deadline_at.is_some(), "deadline_at");
        add_field!(total_fine.is_some(), "total_fine");

        let query = format!(
            "UPDATE transactions SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Transaction>(&query).bind(now);
        if let Some(status) = status {
            builder = builder.bind(status);
        }
        if let Some(deadline) = deadline_at {
            builder = builder.bind(deadline);
        }
        if let Some(fine) = total_fine {
            builder = builder.bind(fine);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))
    }

    /// Hard delete a transaction together with its items
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM transaction_items WHERE transaction_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    // ---- Items ----

    /// List items attached to a transaction
    pub async fn list_items(&self, transaction_id: Uuid) -> AppResult<Vec<TransactionItem>> {
        let rows = sqlx::query_as::<_, TransactionItem>(
            "SELECT * FROM transaction_items WHERE transaction_id = $1 ORDER BY created_at",
        )
        .bind(transaction_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Check whether a book is already attached to a transaction
    pub async fn item_exists(&self, transaction_id: Uuid, book_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM transaction_items WHERE transaction_id = $1 AND book_id = $2)",
        )
        .bind(transaction_id)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Attach a book to a transaction
    pub async fn create_item(
        &self,
        transaction_id: Uuid,
        book_id: i32,
        note: Option<&str>,
    ) -> AppResult<TransactionItem> {
        let row = sqlx::query_as::<_, TransactionItem>(
            r#"
            INSERT INTO transaction_items (transaction_id, book_id, transaction_item_note)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(transaction_id)
        .bind(book_id)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
