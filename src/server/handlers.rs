use axum::extract::{Path, Query, Request, State};
use axum::http::{Method, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::catalog::query::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::catalog::ListingPage;
use crate::domain::Article;
use crate::server::error::ApiError;
use crate::server::AppState;

const ARTICLES_PREFIX: &str = "/api/v1/articles";

/// Raw listing parameters. Kept as strings so bad input can fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn positive_or(name: &str, raw: Option<&str>, default: u32) -> u32 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => {
            tracing::warn!("Invalid {} parameter: {:?}, using {}", name, raw, default);
            default
        }
    }
}

pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListingPage> {
    let page = positive_or("page", params.page.as_deref(), DEFAULT_PAGE);
    let limit = positive_or("limit", params.limit.as_deref(), DEFAULT_LIMIT);

    Json(state.catalog.listing(params.category.as_deref(), page, limit))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::InvalidArticleId);
    }

    state
        .catalog
        .by_id(id)
        .map(Json)
        .ok_or(ApiError::ArticleNotFound)
}

/// Anything under the articles prefix that no route matched, e.g.
/// `/api/v1/articles/` or `/api/v1/articles/a/b`.
fn is_article_path(path: &str) -> bool {
    path.strip_prefix(ARTICLES_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

pub async fn not_found(uri: Uri) -> ApiError {
    if is_article_path(uri.path()) {
        ApiError::ArticleEndpointNotFound
    } else {
        ApiError::EndpointNotFound
    }
}

/// Delay and fail requests at the configured rates. `OPTIONS` passes through.
///
/// Preflight requests are normally answered by the CORS layer before they
/// get here.
pub async fn inject_faults(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let fault = state.faults.roll();
    if let Some(delay) = fault.delay {
        tracing::debug!("Delaying {} by {:?}", request.uri(), delay);
        tokio::time::sleep(delay).await;
    }
    if fault.fail {
        return ApiError::Simulated.into_response();
    }

    next.run(request).await
}
