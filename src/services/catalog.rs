//! Catalog service: authors, publishers and books

use chrono::Datelike;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        book::{Book, CreateBook, UpdateBook},
        publisher::{CreatePublisher, Publisher, UpdatePublisher},
        ListQuery,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // ---- Authors ----

    pub async fn list_authors(&self, query: &ListQuery) -> AppResult<Vec<Author>> {
        let authors = self.repository.authors.list(query).await?;
        if authors.is_empty() {
            return Err(AppError::NotFound("No authors found".to_string()));
        }
        Ok(authors)
    }

    pub async fn create_author(&self, data: &CreateAuthor) -> AppResult<Author> {
        let name = require_name(&data.author_name, "Author name")?;
        self.repository.authors.create(name).await
    }

    pub async fn update_author(&self, id: i32, data: &UpdateAuthor) -> AppResult<Author> {
        let name = require_name(&data.author_name, "Author name")?;
        self.repository.authors.update(id, name).await
    }

    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }

    // ---- Publishers ----

    pub async fn list_publishers(&self, query: &ListQuery) -> AppResult<Vec<Publisher>> {
        let publishers = self.repository.publishers.list(query).await?;
        if publishers.is_empty() {
            return Err(AppError::NotFound("No publishers found".to_string()));
        }
        Ok(publishers)
    }

    pub async fn create_publisher(&self, data: &CreatePublisher) -> AppResult<Publisher> {
        let name = require_name(&data.publisher_name, "Publisher name")?;

        if self.repository.publishers.name_exists(name, None).await? {
            return Err(AppError::Conflict(
                "Publisher name already exists".to_string(),
            ));
        }

        self.repository.publishers.create(name).await
    }

    pub async fn update_publisher(&self, id: i32, data: &UpdatePublisher) -> AppResult<Publisher> {
        let name = require_name(&data.publisher_name, "Publisher name")?;

        if self
            .repository
            .publishers
            .name_exists(name, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "Publisher name already exists".to_string(),
            ));
        }

        self.repository.publishers.update(id, name).await
    }

    pub async fn delete_publisher(&self, id: i32) -> AppResult<()> {
        self.repository.publishers.delete(id).await
    }

    // ---- Books ----

    pub async fn list_books(&self, query: &ListQuery) -> AppResult<Vec<Book>> {
        let books = self.repository.books.list(query).await?;
        if books.is_empty() {
            return Err(AppError::NotFound("No books found".to_string()));
        }
        Ok(books)
    }

    pub async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        let author_id = data
            .author_id
            .ok_or_else(|| AppError::Validation("Author ID is required".to_string()))?;
        let publisher_id = data
            .publisher_id
            .ok_or_else(|| AppError::Validation("Publisher ID is required".to_string()))?;
        let title = require_name(&data.title, "Book title")?;
        let publish_year = data
            .publish_year
            .filter(|y| valid_publish_year(*y))
            .ok_or_else(|| AppError::Validation("Invalid publish year".to_string()))?;

        // Foreign entities must exist before the insert
        self.repository.authors.get_by_id(author_id).await?;
        self.repository.publishers.get_by_id(publisher_id).await?;

        self.repository
            .books
            .create(author_id, publisher_id, title, publish_year)
            .await
    }

    pub async fn update_book(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        if let Some(ref title) = data.title {
            if title.trim().len() < 3 {
                return Err(AppError::Validation(
                    "Book title must be at least 3 characters".to_string(),
                ));
            }
        }
        if let Some(year) = data.publish_year {
            if !valid_publish_year(year) {
                return Err(AppError::Validation("Invalid publish year".to_string()));
            }
        }
        if let Some(author_id) = data.author_id {
            self.repository.authors.get_by_id(author_id).await?;
        }
        if let Some(publisher_id) = data.publisher_id {
            self.repository.publishers.get_by_id(publisher_id).await?;
        }

        self.repository.books.update(id, data).await
    }

    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}

/// Presence + minimum-length check shared by the name-like fields
fn require_name<'a>(value: &'a Option<String>, context: &str) -> AppResult<&'a str> {
    match value {
        Some(v) if v.trim().len() >= 3 => Ok(v.as_str()),
        _ => Err(AppError::Validation(format!(
            "{} must be at least 3 characters",
            context
        ))),
    }
}

fn valid_publish_year(year: i32) -> bool {
    year >= 1000 && year <= chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_name_rejects_missing_and_short_values() {
        assert!(require_name(&None, "Author name").is_err());
        assert!(require_name(&Some("ab".to_string()), "Author name").is_err());
        assert!(require_name(&Some("  a ".to_string()), "Author name").is_err());
        assert_eq!(
            require_name(&Some("Ursula".to_string()), "Author name").unwrap(),
            "Ursula"
        );
    }

    #[test]
    fn require_name_message_names_the_field() {
        let err = require_name(&None, "Book title").unwrap_err();
        assert!(err
            .to_string()
            .contains("Book title must be at least 3 characters"));
    }

    #[test]
    fn publish_year_window() {
        assert!(!valid_publish_year(999));
        assert!(valid_publish_year(1984));
        assert!(!valid_publish_year(chrono::Utc::now().year() + 1));
    }
}
