//! Storage seam for books.
//!
//! Nothing is persisted today: [`NullStore`] answers every call without
//! touching any backend. Backends report failures as [`StorageError`] with
//! the HTTP-style status code they observed.

use async_trait::async_trait;
use thiserror::Error;

use super::models::Book;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("storage error ({status}): {message}")]
pub struct StorageError {
    pub status: u16,
    pub message: String,
}

impl StorageError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Book>, StorageError>;

    async fn get(&self, id: &str) -> Result<Book, StorageError>;

    async fn insert(&self, book: &Book) -> Result<(), StorageError>;

    async fn update(&self, id: &str, book: &Book) -> Result<(), StorageError>;

    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}

/// Backend that stores nothing: empty listings, default lookups, no-op writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

#[async_trait]
impl BookStore for NullStore {
    async fn list(&self) -> Result<Vec<Book>, StorageError> {
        Ok(Vec::new())
    }

    async fn get(&self, _id: &str) -> Result<Book, StorageError> {
        Ok(Book::default())
    }

    async fn insert(&self, _book: &Book) -> Result<(), StorageError> {
        Ok(())
    }

    async fn update(&self, _id: &str, _book: &Book) -> Result<(), StorageError> {
        Ok(())
    }

    async fn delete(&self, _id: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
