//! Staff repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        staff::{Staff, StaffRole, UpdateStaff},
        ListQuery,
    },
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List staff with substring search and pagination
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Staff>> {
        let (limit, offset) = query.window();

        let rows = match query.search {
            Some(ref search) => {
                sqlx::query_as::<_, Staff>(
                    r#"
                    SELECT * FROM staff
                    WHERE LOWER(staff_name) LIKE $1
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
                sqlx::query_as::<_, Staff>("SELECT * FROM staff ORDER BY id LIMIT $1 OFFSET $2")
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// Get staff by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff not found".to_string()))
    }

    /// Get staff by email (authentication lookup)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Staff>> {
        let staff =
            sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE LOWER(staff_email) = LOWER($1)")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(staff)
    }

    /// Check if a staff email is already taken
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM staff WHERE LOWER(staff_email) = LOWER($1) AND id != $2)",
            )
            .bind(email)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM staff WHERE LOWER(staff_email) = LOWER($1))",
            )
            .bind(email)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(exists)
    }

    /// Create a new staff account with a pre-hashed password
    pub async fn create(
        &self,
        branch_id: i32,
        staff_name: &str,
        staff_email: &str,
        staff_role: StaffRole,
        password_hash: &str,
    ) -> AppResult<Staff> {
        let row = sqlx::query_as::<_, Staff>(
            r#"
            INSERT INTO staff (branch_id, staff_name, staff_email, staff_role, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(branch_id)
        .bind(staff_name)
        .bind(staff_email)
        .bind(staff_role)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a staff account, only touching provided fields
    pub async fn update(
        &self,
        id: i32,
        data: &UpdateStaff,
        staff_role: Option<StaffRole>,
        password_hash: Option<String>,
    ) -> AppResult<Staff> {
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

        add_field!(data.branch_id.is_some(), "branch_id");
        add_field!(data.staff_name.is_some(), "staff_name");
        add_field!(data.staff_email.is_some(), "staff_email");
        add_field!(staff_role.is_some(), "staff_role");
        add_field!(password_hash.is_some(), "password");

        let query = format!(
            "UPDATE staff SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Staff>(&query).bind(now);
        if let Some(branch_id) = data.branch_id {
            builder = builder.bind(branch_id);
        }
        if let Some(ref name) = data.staff_name {
            builder = builder.bind(name);
        }
        if let Some(ref email) = data.staff_email {
            builder = builder.bind(email);
        }
        if let Some(role) = staff_role {
            builder = builder.bind(role);
        }
        if let Some(ref hash) = password_hash {
            builder = builder.bind(hash);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff not found".to_string()))
    }

    /// Hard delete a staff account with its schedules and transactions
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM schedules WHERE staff_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            DELETE FROM transaction_items
            WHERE transaction_id IN (SELECT id FROM transactions WHERE staff_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM transactions WHERE staff_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Staff not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
