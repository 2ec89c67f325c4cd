//! HTTP handlers for the `/book` routes.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use bookstore_http::error::AppError;

use super::models::Book;
use super::store::BookStore;

pub type SharedStore = Arc<dyn BookStore>;

/// `GET /book`
pub async fn get_books(State(store): State<SharedStore>) -> Result<Json<Vec<Book>>, AppError> {
    let books = store.list().await.context("failed to list books")?;

    tracing::info!(count = books.len(), "getting all books from the database");

    Ok(Json(books))
}

/// `GET /book/{id}`; the id is not interpreted.
pub async fn get_book_by_id(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let book = store
        .get(&id)
        .await
        .with_context(|| format!("failed to get book '{}'", id))?;

    tracing::info!(
        id = %id,
        title = book.title.as_deref().unwrap_or_default(),
        "get book from database"
    );

    Ok(Json(book))
}

/// `POST /book`
pub async fn add_book(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Json<Book>, AppError> {
    let book = parse_book(&body)?;

    store.insert(&book).await.context("failed to add book")?;

    tracing::info!(
        id = book.id,
        title = book.title.as_deref().unwrap_or_default(),
        "added new book to database"
    );

    Ok(Json(book))
}

/// `PUT /book/{id}`; the body is echoed, the path id is only logged.
pub async fn update_book(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Book>, AppError> {
    let book = parse_book(&body)?;

    store
        .update(&id, &book)
        .await
        .with_context(|| format!("failed to update book '{}'", id))?;

    tracing::info!(
        path_id = %id,
        id = book.id,
        title = book.title.as_deref().unwrap_or_default(),
        "updated book in database"
    );

    Ok(Json(book))
}

/// `DELETE /book/{id}`; echoes the id as plain text, 404 when storage
/// reports it missing.
pub async fn delete_book(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    match store.delete(&id).await {
        Ok(()) => {
            tracing::info!(id = %id, "deleted book from database");
            Ok(id)
        }
        Err(err) if err.is_not_found() => {
            Err(AppError::not_found(format!("book '{}' not found", id)))
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("failed to delete book '{}'", id))
            .into()),
    }
}

/// Malformed bodies are not answered with 400: they surface as internal errors.
fn parse_book(body: &[u8]) -> Result<Book, AppError> {
    let book: Book =
        serde_json::from_slice(body).context("failed to deserialize book from request body")?;
    Ok(book)
}
