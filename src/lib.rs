//! Bookstore application library
//!
//! Holds the application modules and the bootstrap shared by the
//! `bookstore-app` binary and the `bookstore` CLI.

pub mod modules;

use anyhow::Context;
use bookstore_kernel::{settings::Settings, InitCtx, ModuleRegistry};

pub use modules::books;

/// Registry with every application module registered
pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Run the module lifecycle around the HTTP server until shutdown
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = registry();
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    let served = bookstore_http::start_server(&registry, &settings)
        .await
        .context("HTTP server terminated with an error");

    // Modules are stopped even when serving failed; the serve error wins.
    let stopped = registry.stop_all().await;
    served?;
    stopped
}
