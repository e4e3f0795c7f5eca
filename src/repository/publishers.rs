//! Publishers repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{publisher::Publisher, ListQuery},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List publishers with substring search and pagination
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Publisher>> {
        let (limit, offset) = query.window();

        let rows = match query.search {
            Some(ref search) => {
                sqlx::query_as::<_, Publisher>(
                    r#"
                    SELECT * FROM publishers
                    WHERE LOWER(publisher_name) LIKE $1
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
                sqlx::query_as::<_, Publisher>(
                    "SELECT * FROM publishers ORDER BY id LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    /// Get publisher by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Publisher not found".to_string()))
    }

    /// Check if a publisher name is already taken
    pub async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM publishers WHERE publisher_name = $1 AND id != $2)",
            )
            .bind(name)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM publishers WHERE publisher_name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Create a new publisher
    pub async fn create(&self, publisher_name: &str) -> AppResult<Publisher> {
        let row = sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (publisher_name) VALUES ($1) RETURNING *",
        )
        .bind(publisher_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rename a publisher
    pub async fn update(&self, id: i32, publisher_name: &str) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "UPDATE publishers SET publisher_name = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(publisher_name)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Publisher not found".to_string()))
    }

    /// Hard delete a publisher together with their books and the
    /// transaction items referencing those books
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM transaction_items
            WHERE book_id IN (SELECT id FROM books WHERE publisher_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM books WHERE publisher_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Publisher not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
