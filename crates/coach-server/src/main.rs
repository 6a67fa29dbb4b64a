//! Pro Coach Virtual static host
//!
//! Serves the built WASM frontend. Paths that are not files fall back to
//! `index.html` so the single-page app always loads.

mod config;
mod handlers;

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::health_check;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    if !config.index_file().is_file() {
        tracing::warn!(
            "{} not found - build the frontend first (trunk build --release)",
            config.index_file().display()
        );
    }

    let app = build_router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Pro Coach Virtual running on http://{}", config.bind_addr);
    tracing::info!("  Serving {}", config.site_dir.display());
    tracing::info!("  GET  /health - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn config(site_dir: &str) -> ServerConfig {
        ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            site_dir: PathBuf::from(site_dir),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = build_router(&config("dist"));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_missing_site_is_not_found() {
        let app = build_router(&config("does-not-exist"));
        let response = app
            .oneshot(Request::builder().uri("/pricing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_paths_serve_index_with_ok() {
        let site_dir = std::env::temp_dir().join(format!("coach-site-{}", std::process::id()));
        std::fs::create_dir_all(&site_dir).unwrap();
        std::fs::write(site_dir.join("index.html"), "<html>APP</html>").unwrap();

        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            site_dir: site_dir.clone(),
        };

        for uri in ["/", "/pricing", "/login/extra"] {
            let response = build_router(&config)
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "status for {uri}");
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&body[..], b"<html>APP</html>", "body for {uri}");
        }

        std::fs::remove_dir_all(&site_dir).ok();
    }
}
