pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use bookstore_kernel::{InitCtx, Module};

use store::{BookStore, NullStore};

/// Five CRUD routes over `Book`, backed by a [`BookStore`]
pub struct BooksModule {
    store: Arc<dyn BookStore>,
}

impl BooksModule {
    pub fn new() -> Self {
        Self::with_store(Arc::new(NullStore))
    }

    pub fn with_store(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/book", get(routes::get_books).post(routes::add_book))
            .route(
                "/book/{id}",
                get(routes::get_book_by_id)
                    .put(routes::update_book)
                    .delete(routes::delete_book),
            )
            .with_state(Arc::clone(&self.store))
    }

    fn route_table(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("GET", "/book"),
            ("GET", "/book/{id}"),
            ("POST", "/book"),
            ("PUT", "/book/{id}"),
            ("DELETE", "/book/{id}"),
        ]
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BooksModule::new())
}
