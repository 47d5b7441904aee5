//! HTTP request handlers for the text analysis service.
//!
//! Implements keyword extraction, summarization and health check endpoints
//! using axum. CPU-bound work runs on the blocking thread pool.

use crate::observability::request_id_middleware;
use axum::{
    async_trait,
    body::Bytes,
    extract::{DefaultBodyLimit, FromRequest, Request, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use precis_nlp::{KeywordExtractor, NlpError};
use precis_summarizer::{SummarizerError, TextRankSummarizer};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, warn, Level};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Keyword extraction pipeline
    pub keywords: Arc<KeywordExtractor>,
    /// Summarization pipeline
    pub summarizer: Arc<TextRankSummarizer>,
    /// Longest accepted `text`, in characters; `None` disables the check
    pub max_text_length: Option<usize>,
    /// Largest accepted request body, in bytes; `None` disables the limit
    pub max_body_bytes: Option<usize>,
}

impl AppState {
    fn check_length(&self, text: &str) -> Result<(), ApiError> {
        let Some(max) = self.max_text_length else {
            return Ok(());
        };
        let len = text.chars().count();
        if len > max {
            return Err(ApiError::TextTooLong { len, max });
        }
        Ok(())
    }

    fn body_limit(&self) -> DefaultBodyLimit {
        match self.max_body_bytes {
            Some(max) => DefaultBodyLimit::max(max),
            None => DefaultBodyLimit::disable(),
        }
    }
}

/// Body accepted by both analysis endpoints
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    /// Raw text, possibly containing HTML
    pub text: String,
}

#[async_trait]
impl<S> FromRequest<S> for TextRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BodyRejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidText)
    }
}

/// Keyword extraction response
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsResponse {
    /// Phrases ordered by first occurrence
    pub keywords: Vec<String>,
}

/// Summarization response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Selected sentences joined by spaces
    pub summary: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not JSON or `text` is missing or not a string
    #[error("Missing or invalid text parameter")]
    InvalidText,

    /// Nothing left once markup and whitespace are removed
    #[error("Empty text provided after sanitization")]
    EmptyText,

    /// `text` exceeds the configured limit
    #[error("Text too long: {len} chars (max: {max})")]
    TextTooLong {
        /// Length of the submitted text
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// The request body could not be read, e.g. it exceeds the body limit
    #[error("{message}")]
    BodyRejected {
        /// Status reported by the body extractor
        status: StatusCode,
        /// Reason reported by the body extractor
        message: String,
    },

    /// Unexpected processing failure
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidText | ApiError::EmptyText => StatusCode::BAD_REQUEST,
            ApiError::TextTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BodyRejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            error!(error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<NlpError> for ApiError {
    fn from(err: NlpError) -> Self {
        match err {
            NlpError::EmptyText => ApiError::EmptyText,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<SummarizerError> for ApiError {
    fn from(err: SummarizerError) -> Self {
        match err {
            SummarizerError::EmptyText => ApiError::EmptyText,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Run `work` on the blocking pool; panics become [`ApiError::Internal`]
async fn run_blocking<F, T, E>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(result) => result.map_err(Into::into),
        Err(e) if e.is_panic() => Err(ApiError::Internal(panic_message(e.into_panic()))),
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "Text processing panicked".to_string()
    }
}

/// POST /extract-keywords
pub async fn extract_keywords(
    State(state): State<AppState>,
    request: TextRequest,
) -> Result<Json<KeywordsResponse>, ApiError> {
    state.check_length(&request.text)?;
    info!(bytes = request.text.len(), "Extracting keywords");

    let extractor = Arc::clone(&state.keywords);
    let keywords = run_blocking(move || extractor.extract(&request.text)).await?;

    info!(count = keywords.len(), "Keywords extracted");
    Ok(Json(KeywordsResponse {
        keywords: keywords.into_iter().map(|k| k.phrase).collect(),
    }))
}

/// POST /summarize
pub async fn summarize(
    State(state): State<AppState>,
    request: TextRequest,
) -> Result<Json<SummaryResponse>, ApiError> {
    state.check_length(&request.text)?;
    info!(bytes = request.text.len(), "Summarizing text");

    let summarizer = Arc::clone(&state.summarizer);
    let summary = run_blocking(move || summarizer.summarize(&request.text)).await?;

    info!(
        sentences = summary.len(),
        used_fallback = summary.used_fallback,
        "Summary produced"
    );
    Ok(Json(SummaryResponse {
        summary: summary.text(),
    }))
}

/// GET /health
pub async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
    })
}

/// Create the axum router with all routes and layers
pub fn create_router(state: AppState) -> AxumRouter {
    let body_limit = state.body_limit();
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    AxumRouter::new()
        .route("/health", get(health))
        .route("/extract-keywords", post(extract_keywords))
        .route("/summarize", post(summarize))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ApiError::InvalidText.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmptyText.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::TextTooLong { len: 11, max: 10 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::BodyRejected {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                message: "length limit exceeded".to_string(),
            }
            .status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::TextTooLong { len: 11, max: 10 }.to_string(),
            "Text too long: 11 chars (max: 10)"
        );
        assert_eq!(
            ApiError::from(NlpError::EmptyText).to_string(),
            "Empty text provided after sanitization"
        );
        assert!(matches!(
            ApiError::from(SummarizerError::Config("bad".to_string())),
            ApiError::Internal(_)
        ));
    }

    #[tokio::test]
    async fn test_panics_become_internal_errors() {
        let result: Result<(), ApiError> =
            run_blocking(|| -> Result<(), NlpError> { panic!("tagger exploded") }).await;
        match result {
            Err(ApiError::Internal(msg)) => assert_eq!(msg, "tagger exploded"),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
