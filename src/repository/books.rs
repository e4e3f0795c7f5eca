//! Books repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, UpdateBook},
        ListQuery,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List books with substring title search and pagination
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Book>> {
        let (limit, offset) = query.window();

        let rows = match query.search {
            Some(ref search) => {
                sqlx::query_as::<_, Book>(
                    r#"
                    SELECT * FROM books
                    WHERE LOWER(title) LIKE $1
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
                sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id LIMIT $1 OFFSET $2")
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Create a new book
    pub async fn create(
        &self,
        author_id: i32,
        publisher_id: i32,
        title: &str,
        publish_year: i32,
    ) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (author_id, publisher_id, title, publish_year)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(author_id)
        .bind(publisher_id)
        .bind(title)
        .bind(publish_year)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a book, only touching provided fields
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
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

        add_field!(data.author_id.is_some(), "author_id");
        add_field!(data.publisher_id.is_some(), "publisher_id");
        add_field!(data.title.is_some(), "title");
        add_field!(data.publish_year.is_some(), "publish_year");

        let query = format!(
            "UPDATE books SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Book>(&query).bind(now);
        if let Some(author_id) = data.author_id {
            builder = builder.bind(author_id);
        }
        if let Some(publisher_id) = data.publisher_id {
            builder = builder.bind(publisher_id);
        }
        if let Some(ref title) = data.title {
            builder = builder.bind(title);
        }
        if let Some(publish_year) = data.publish_year {
            builder = builder.bind(publish_year);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Hard delete a book and the transaction items referencing it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM transaction_items WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
