//! Local stand-in for the article backend.
//!
//! Serves the sample catalog over HTTP under `/api/v1/`, with random
//! latency and injected failures so clients can exercise their fallback
//! paths.

pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app::{NewsdeskError, Result};
use crate::catalog::ContentStore;
use crate::config::ServerConfig;
use crate::remote::FaultInjector;

pub use error::ApiError;

pub const MIN_PORT: u16 = 1024;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ContentStore>,
    pub faults: FaultInjector,
}

impl AppState {
    pub fn new(catalog: Arc<ContentStore>, faults: FaultInjector) -> Self {
        Self { catalog, faults }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/articles", get(handlers::list_articles))
        .route("/api/v1/articles/{id}", get(handlers::get_article))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::inject_faults,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// A server running in a background task.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL clients should use, with the API prefix and trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1/", self.local_addr)
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        (&mut self.task)
            .await
            .map_err(|e| NewsdeskError::Other(format!("Server task failed: {}", e)))?;
        tracing::info!("Fake API server on {} stopped", self.local_addr);
        Ok(())
    }
}

/// Bind `config.host:config.port` and serve the catalog until stopped.
pub async fn start(config: &ServerConfig, catalog: Arc<ContentStore>) -> Result<ServerHandle> {
    if config.port < MIN_PORT {
        return Err(NewsdeskError::Config(format!(
            "Port must be between {} and 65535, got {}",
            MIN_PORT, config.port
        )));
    }

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    spawn(listener, AppState::new(catalog, config.faults()))
}

/// Serve on an already bound listener.
pub fn spawn(listener: TcpListener, state: AppState) -> Result<ServerHandle> {
    let local_addr = listener.local_addr()?;
    let (shutdown, shutdown_rx) = oneshot::channel::<()>();
    let app = router(state);

    let task = tokio::spawn(async move {
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
        if let Err(e) = served {
            tracing::error!("Fake API server error: {}", e);
        }
    });

    tracing::info!("Fake API server listening on http://{}/api/v1/", local_addr);

    Ok(ServerHandle {
        local_addr,
        shutdown: Some(shutdown),
        task,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::Article;

    fn twelve_articles() -> Arc<ContentStore> {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let articles = (1..=12)
            .map(|i| {
                let mut article = Article::new(format!("item{}", i), format!("Item {}", i), base - Duration::hours(i));
                article.category_id = if i % 2 == 0 { "tech" } else { "news" }.into();
                article
            })
            .collect();
        Arc::new(ContentStore::with_articles(articles))
    }

    fn app(catalog: Arc<ContentStore>, faults: FaultInjector) -> Router {
        router(AppState::new(catalog, faults))
    }

    async fn send(app: Router, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn call(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let response = send(app, method, uri).await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids(body: &Value) -> Vec<String> {
        body["articles"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_second_page_of_twelve() {
        let app = app(twelve_articles(), FaultInjector::disabled());
        let (status, body) = call(app, Method::GET, "/api/v1/articles?page=2&limit=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["item6", "item7", "item8", "item9", "item10"]);
        assert_eq!(body["pagination"]["total"], 12);
        assert_eq!(body["pagination"]["count"], 5);
        assert_eq!(body["pagination"]["page"], 2);
        assert_eq!(body["pagination"]["limit"], 5);
    }

    #[tokio::test]
    async fn test_category_filter_and_bad_params() {
        let app = app(twelve_articles(), FaultInjector::disabled());
        let (status, body) = call(app, Method::GET, "/api/v1/articles?category=tech&page=zero&limit=-1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["page"], 1);
        assert_eq!(body["pagination"]["limit"], 20);
        assert_eq!(body["pagination"]["total"], 6);
        assert_eq!(ids(&body)[0], "item2");
    }

    #[tokio::test]
    async fn test_article_lookup() {
        let catalog = twelve_articles();
        let (status, body) = call(app(catalog.clone(), FaultInjector::disabled()), Method::GET, "/api/v1/articles/item3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "item3");
        assert_eq!(body["categoryId"], "news");

        let (status, body) = call(app(catalog.clone(), FaultInjector::disabled()), Method::GET, "/api/v1/articles/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Article not found");

        let (status, body) = call(app(catalog, FaultInjector::disabled()), Method::GET, "/api/v1/articles/%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid article ID");
    }

    #[tokio::test]
    async fn test_unknown_route_and_options() {
        let catalog = twelve_articles();
        let (status, body) = call(app(catalog.clone(), FaultInjector::disabled()), Method::GET, "/api/v2/things").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Endpoint not found");

        for uri in ["/api/v1/articles/", "/api/v1/articles/a/b"] {
            let (status, body) = call(app(catalog.clone(), FaultInjector::disabled()), Method::GET, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body["error"], "Article endpoint not found", "{}", uri);
        }

        // Preflight is answered even when every other request would fail.
        let always_fail = FaultInjector::new(0.0, 0, 0, 1.0);
        let response = send(app(catalog, always_fail), Method::OPTIONS, "/api/v1/articles/item1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let always_fail = FaultInjector::new(0.0, 0, 0, 1.0);
        let (status, body) = call(app(twelve_articles(), always_fail), Method::GET, "/api/v1/articles").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Simulated server error");
    }

    #[tokio::test]
    async fn test_cors_header_on_responses() {
        let response = send(app(twelve_articles(), FaultInjector::disabled()), Method::GET, "/api/v1/articles").await;
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_start_rejects_privileged_port() {
        let config = ServerConfig {
            port: 80,
            ..ServerConfig::default()
        };
        assert!(start(&config, twelve_articles()).await.is_err());
    }

    #[tokio::test]
    async fn test_spawn_and_stop() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let handle = spawn(listener, AppState::new(twelve_articles(), FaultInjector::disabled())).unwrap();
        assert!(handle.is_running());
        assert!(handle.base_url().ends_with("/api/v1/"));
        handle.stop().await.unwrap();
    }
}
