use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Article not found")]
    ArticleNotFound,

    #[error("Invalid article ID")]
    InvalidArticleId,

    #[error("Article endpoint not found")]
    ArticleEndpointNotFound,

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Simulated server error")]
    Simulated,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ArticleNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidArticleId => StatusCode::BAD_REQUEST,
            ApiError::ArticleEndpointNotFound => StatusCode::NOT_FOUND,
            ApiError::EndpointNotFound => StatusCode::NOT_FOUND,
            ApiError::Simulated => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Simulated => tracing::warn!("Injecting failure: {}", self),
            _ => tracing::debug!("{}", self),
        }

        let payload = Json(json!({ "error": self.to_string() }));

        (self.status(), payload).into_response()
    }
}
