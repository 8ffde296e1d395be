//! Server Module Tests
//!
//! Validates the document-serving handlers against files on disk.
//!
//! ## Test Scopes
//! - **Success path**: Verbatim bytes with a JSON content type.
//! - **Failure path**: Missing documents yield a server error, never an empty
//!   200.
//! - **Round-trip**: A converted country document is parseable through the
//!   handler.

#[cfg(test)]
mod tests {
    use crate::converter::types::{AdminLevel, BoundaryRecord};
    use crate::converter::{run, ConvertConfig};
    use crate::server::handlers::{serve_country, serve_document, serve_regions};
    use crate::server::ServerConfig;
    use axum::body::to_bytes;
    use axum::http::{header, StatusCode};
    use axum::Extension;
    use serde_json::json;
    use std::sync::Arc;

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    // ============================================================
    // SUCCESS PATH
    // ============================================================

    #[tokio::test]
    async fn test_serve_document_returns_file_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let document = b"[\n  {\n    \"id\": \"x\"\n  }\n]";
        std::fs::write(dir.path().join("regions.json"), document).unwrap();

        let config = ServerConfig::new(dir.path(), 8000);
        let response = serve_document(&config, AdminLevel::Region).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_bytes(response).await, document);
    }

    #[tokio::test]
    async fn test_serve_document_reads_fresh_per_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("communes.json");
        let config = ServerConfig::new(dir.path(), 8000);

        std::fs::write(&path, b"[1]").unwrap();
        let first = serve_document(&config, AdminLevel::Commune).await;
        assert_eq!(body_bytes(first).await, b"[1]");

        // A rewrite must be visible on the very next request; nothing caches.
        std::fs::write(&path, b"[2]").unwrap();
        let second = serve_document(&config, AdminLevel::Commune).await;
        assert_eq!(body_bytes(second).await, b"[2]");
    }

    // ============================================================
    // FAILURE PATH
    // ============================================================

    #[tokio::test]
    async fn test_missing_document_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Arc::new(ServerConfig::new(dir.path(), 8000));

        let response = serve_regions(Extension(config)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(
            body["error"].as_str().unwrap().contains("unavailable"),
            "error body should say which document is unavailable"
        );
    }

    // ============================================================
    // CONVERTER ROUND-TRIP
    // ============================================================

    #[tokio::test]
    async fn test_converted_country_served_and_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let out_dir = dir.path().join("assets");
        std::fs::create_dir_all(&data_dir).unwrap();

        for level in AdminLevel::ALL {
            let document = json!({
                "features": [{
                    "properties": {
                        "ADM0_PCODE": "MG", "ADM0_EN": "Madagascar",
                        "ADM1_PCODE": "MG11", "ADM1_EN": "Analamanga",
                        "ADM2_PCODE": "MG11101", "ADM2_EN": "Antananarivo Renivohitra",
                        "ADM3_PCODE": "MG11101001", "ADM3_EN": "1er Arrondissement",
                        "ADM4_PCODE": "MG11101001001", "ADM4_EN": "Ambatonakanga",
                        "OLD_PROVIN": "Antananarivo", "PROV_CODE_": 1
                    },
                    "geometry": {"type": "Point", "coordinates": [47.52, -18.91]}
                }]
            });
            std::fs::write(
                data_dir.join(level.input_filename()),
                serde_json::to_vec(&document).unwrap(),
            )
            .unwrap();
        }

        run(&ConvertConfig::new(&data_dir, &out_dir)).await.unwrap();

        let config = Arc::new(ServerConfig::new(&out_dir, 8000));
        let response = serve_country(Extension(config)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let country: BoundaryRecord =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(country.code, "MG");
        assert_eq!(country.name, "Madagascar");
        assert!(country.province.is_none());
        assert!(!country.id.0.is_empty());
    }
}
