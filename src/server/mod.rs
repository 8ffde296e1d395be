//! Boundary Server Module
//!
//! The read-only HTTP surface over the generated boundary documents.
//!
//! ## Behavior
//! - **Routing**: Five fixed `GET` routes, each mapped 1:1 to one generated
//!   document.
//! - **Freshness**: Every request reads its file from disk; there is no
//!   in-memory cache and no conditional-request handling, so a re-run of the
//!   converter is visible on the next request.
//! - **Failure**: A missing or unreadable document produces a `500` with a
//!   JSON error body. Failures are request-local and never take down the
//!   listener.
//!
//! ## Submodules
//! - **`handlers`**: The generic file-serving handler and its per-route
//!   wrappers.

pub mod handlers;

#[cfg(test)]
mod tests;

use crate::converter::types::AdminLevel;
use axum::{routing::get, Extension, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Runtime configuration for the HTTP stage.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory the converter wrote its documents to.
    pub out_dir: PathBuf,
    /// TCP port the listener binds on.
    pub port: u16,
}

impl ServerConfig {
    pub fn new(out_dir: impl Into<PathBuf>, port: u16) -> Self {
        Self {
            out_dir: out_dir.into(),
            port,
        }
    }

    /// Path of the document served for a level.
    pub fn document_path(&self, level: AdminLevel) -> PathBuf {
        self.out_dir.join(level.output_filename())
    }
}

/// Builds the router: one route per administrative level, with the shared
/// configuration injected as an extension.
pub fn router(config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route(AdminLevel::Country.route(), get(handlers::serve_country))
        .route(AdminLevel::Region.route(), get(handlers::serve_regions))
        .route(AdminLevel::District.route(), get(handlers::serve_districts))
        .route(AdminLevel::Commune.route(), get(handlers::serve_communes))
        .route(AdminLevel::Fokontany.route(), get(handlers::serve_fokontany))
        .layer(Extension(config))
}

/// Binds the listener and serves requests until the process exits.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(Arc::new(config));

    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
