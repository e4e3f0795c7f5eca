//! Branches repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        branch::{Branch, BranchDetail, UpdateBranch},
        member::Member,
        ListQuery,
    },
};

#[derive(Clone)]
pub struct BranchesRepository {
    pool: Pool<Postgres>,
}

impl BranchesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List branches with substring search and pagination
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Branch>> {
        let (limit, offset) = query.window();

        let rows = match query.search {
            Some(ref search) => {
                sqlx::query_as::<_, Branch>(
                    r#"
                    SELECT * FROM branches
                    WHERE LOWER(branch_name) LIKE $1
                    ORDER BY id
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(format!("%{}%", search.to_lowercase()))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Branch>("SELECT * FROM branches ORDER BY id LIMIT $1 OFFSET $2")
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// Get branch by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Branch> {
        sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Branch not found".to_string()))
    }

    /// Get branch by ID together with its registered members
    pub async fn get_detail(&self, id: i32) -> AppResult<BranchDetail> {
        let branch = self.get_by_id(id).await?;

        let members = sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE branch_id = $1 ORDER BY fullname",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(BranchDetail::new(branch, members))
    }

    /// Check if a branch name is already taken
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM branches WHERE branch_name = $1 AND id != $2)",
            )
            .bind(name)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM branches WHERE branch_name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Create a new branch
    pub async fn create(&self, branch_name: &str, branch_address: &str) -> AppResult<Branch> {
        let row = sqlx::query_as::<_, Branch>(
            "INSERT INTO branches (branch_name, branch_address) VALUES ($1, $2) RETURNING *",
        )
        .bind(branch_name)
        .bind(branch_address)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a branch, only touching provided fields
    pub async fn update(&self, id: i32, data: &UpdateBranch) -> AppResult<Branch> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        if data.branch_name.is_some() {
            sets.push(format!("branch_name = ${}", idx));
            idx += 1;
        }
        if data.branch_address.is_some() {
            sets.push(format!("branch_address = ${}", idx));
            idx += 1;
        }

        let query = format!(
            "UPDATE branches SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Branch>(&query).bind(now);
        if let Some(ref name) = data.branch_name {
            builder = builder.bind(name);
        }
        if let Some(ref address) = data.branch_address {
            builder = builder.bind(address);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Branch not found".to_string()))
    }

    /// Hard delete a branch and everything registered under it:
    /// staff schedules, branch transactions and their items, members, staff
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM schedules
            WHERE staff_id IN (SELECT id FROM staff WHERE branch_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        // Transactions can reference branch staff from another branch's
        // counter, so match on both the branch and its staff
        sqlx::query(
            r#"
            DELETE FROM transaction_items
            WHERE transaction_id IN (
                SELECT id FROM transactions
                WHERE branch_id = $1
                   OR staff_id IN (SELECT id FROM staff WHERE branch_id = $1)
                   OR member_id IN (SELECT id FROM members WHERE branch_id = $1)
            )
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE branch_id = $1
               OR staff_id IN (SELECT id FROM staff WHERE branch_id = $1)
               OR member_id IN (SELECT id FROM members WHERE branch_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM members WHERE branch_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM staff WHERE branch_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Branch not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
