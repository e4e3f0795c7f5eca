//! Authors repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{author::Author, ListQuery},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List authors with substring search and pagination
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Author>> {
        let (limit, offset) = query.window();

        let rows = match query.search {
            Some(ref search) => {
                sqlx::query_as::<_, Author>(
                    r#"
                    SELECT * FROM authors
                    WHERE LOWER(author_name) LIKE $1
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
                sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY id LIMIT $1 OFFSET $2")
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }

    /// Create a new author
    pub async fn create(&self, author_name: &str) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (author_name) VALUES ($1) RETURNING *",
        )
        .bind(author_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rename an author
    pub async fn update(&self, id: i32, author_name: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "UPDATE authors SET author_name = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(author_name)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".to_string()))
    }

    /// Hard delete an author together with their books and the
    /// transaction items referencing those books
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM transaction_items
            WHERE book_id IN (SELECT id FROM books WHERE author_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM books WHERE author_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Author not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
