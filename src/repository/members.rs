//! Members repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        member::{Member, MemberStatus, UpdateMember},
        ListQuery,
    },
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List members with substring search and pagination
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Member>> {
        let (limit, offset) = query.window();

        let rows = match query.search {
            Some(ref search) => {
                sqlx::query_as::<_, Member>(
                    r#"
                    SELECT * FROM members
                    WHERE LOWER(fullname) LIKE $1
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
                sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY id LIMIT $1 OFFSET $2")
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Check if a member email is already taken
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM members WHERE LOWER(email) = LOWER($1) AND id != $2)",
            )
            .bind(email)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM members WHERE LOWER(email) = LOWER($1))",
            )
            .bind(email)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(exists)
    }

    /// Create a new member
    pub async fn create(
        &self,
        branch_id: i32,
        fullname: &str,
        email: &str,
        address: &str,
        status: MemberStatus,
    ) -> AppResult<Member> {
        let row = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (branch_id, fullname, email, address, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(branch_id)
        .bind(fullname)
        .bind(email)
        .bind(address)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a member, only touching provided fields
    pub async fn update(
        &self,
        id: i32,
        data: &UpdateMember,
        status: Option<MemberStatus>,
    ) -> AppResult<Member> {
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
        add_field!(data.fullname.is_some(), "fullname");
        add_field!(data.email.is_some(), "email");
        add_field!(data.address.is_some(), "address");
        add_field!(status.is_some(), "status");

        let query = format!(
            "UPDATE members SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Member>(&query).bind(now);
        if let Some(branch_id) = data.branch_id {
            builder = builder.bind(branch_id);
        }
        if let Some(ref fullname) = data.fullname {
            builder = builder.bind(fullname);
        }
        if let Some(ref email) = data.email {
            builder = builder.bind(email);
        }
        if let Some(ref address) = data.address {
            builder = builder.bind(address);
        }
        if let Some(status) = status {
            builder = builder.bind(status);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Hard delete a member with their transactions and items
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM transaction_items
            WHERE transaction_id IN (SELECT id FROM transactions WHERE member_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM transactions WHERE member_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
