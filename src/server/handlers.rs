use super::ServerConfig;
use crate::converter::types::AdminLevel;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

/// Error body returned when a boundary document cannot be read.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Reads the generated document for `level` fresh from disk and returns its
/// bytes verbatim with a JSON content type.
///
/// A missing or unreadable file becomes a `500` with a JSON error body; it
/// must never surface as an empty `200`.
pub async fn serve_document(config: &ServerConfig, level: AdminLevel) -> Response {
    let path = config.document_path(level);

    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to read {}: {}", path.display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("{} document unavailable", level.label()),
                }),
            )
                .into_response()
        }
    }
}

// Concrete wrappers - one per route in the router table.

pub async fn serve_country(Extension(config): Extension<Arc<ServerConfig>>) -> Response {
    serve_document(&config, AdminLevel::Country).await
}

pub async fn serve_regions(Extension(config): Extension<Arc<ServerConfig>>) -> Response {
    serve_document(&config, AdminLevel::Region).await
}

pub async fn serve_districts(Extension(config): Extension<Arc<ServerConfig>>) -> Response {
    serve_document(&config, AdminLevel::District).await
}

pub async fn serve_communes(Extension(config): Extension<Arc<ServerConfig>>) -> Response {
    serve_document(&config, AdminLevel::Commune).await
}

pub async fn serve_fokontany(Extension(config): Extension<Arc<ServerConfig>>) -> Response {
    serve_document(&config, AdminLevel::Fokontany).await
}
