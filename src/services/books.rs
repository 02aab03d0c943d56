//! Books service

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Create a book (defaults applied) and return the stored document
    pub async fn create(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let new_book = book.into_new_book();
        let id = self.repository.books.insert(&new_book).await?;

        // Re-read so the response is exactly what was stored
        self.repository
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("inserted book {} not found", id)))
    }

    /// Merge-update the named fields of a book
    pub async fn update(&self, id: &str, book: UpdateBook) -> AppResult<()> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let id = ObjectId::parse_str(id)
            .map_err(|e| AppError::BadRequest(format!("invalid book id: {}", e)))?;
        let fields = mongodb::bson::to_document(&book)?;

        let matched = self.repository.books.update(id, fields).await?;
        if matched == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }

    /// Delete a book by identifier
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = ObjectId::parse_str(id)
            .map_err(|e| AppError::BadRequest(format!("invalid book id: {}", e)))?;

        let deleted = self.repository.books.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }
}
