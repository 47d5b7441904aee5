//! Integration tests for the HTTP service

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use precis_server::{
    build_state,
    config::ServerConfig,
    handlers::{create_router, ErrorResponse, HealthCheckResponse, KeywordsResponse, SummaryResponse},
};
use serde::de::DeserializeOwned;
use tower::ServiceExt; // for oneshot

/// Helper to create a router over the default pipelines
fn create_test_app() -> Router {
    create_router(build_state(&ServerConfig::default()).unwrap())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthCheckResponse = read_json(response).await;
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_extract_keywords() {
    let request = post_json(
        "/extract-keywords",
        r#"{"text": "The quick brown fox jumps over the lazy dog."}"#,
    );

    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: KeywordsResponse = read_json(response).await;
    assert_eq!(body.keywords, vec!["quick brown fox", "lazy dog"]);
}

#[tokio::test]
async fn test_extract_keywords_strips_html() {
    let request = post_json(
        "/extract-keywords",
        r#"{"text": "<p>The quick brown fox</p><script>var hidden = 1;</script><p>jumps over the lazy dog.</p>"}"#,
    );

    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: KeywordsResponse = read_json(response).await;
    assert!(body.keywords.contains(&"lazy dog".to_string()));
    assert!(body.keywords.iter().all(|k| !k.contains('<') && !k.contains("hidden")));
}

#[tokio::test]
async fn test_summarize_falls_back_to_ranked_sentences() {
    let request = post_json(
        "/summarize",
        r#"{"text": "The cat sat. It was tired. The dog barked loudly outside."}"#,
    );

    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: SummaryResponse = read_json(response).await;
    assert_eq!(
        body.summary,
        "The dog barked loudly outside. It was tired. The cat sat."
    );
}

#[tokio::test]
async fn test_missing_text_parameter() {
    for uri in ["/extract-keywords", "/summarize"] {
        let response = create_test_app()
            .oneshot(post_json(uri, r#"{"content": "hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.error, "Missing or invalid text parameter");
    }
}

#[tokio::test]
async fn test_non_string_text_parameter() {
    for body in [r#"{"text": 42}"#, r#"{"text": null}"#, r#"{"text": ["a"]}"#] {
        let response = create_test_app()
            .oneshot(post_json("/summarize", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.error, "Missing or invalid text parameter");
    }
}

#[tokio::test]
async fn test_malformed_json() {
    let response = create_test_app()
        .oneshot(post_json("/extract-keywords", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "Missing or invalid text parameter");
}

#[tokio::test]
async fn test_empty_after_sanitization() {
    for uri in ["/extract-keywords", "/summarize"] {
        let response = create_test_app()
            .oneshot(post_json(uri, r#"{"text": "  <p> </p><br/>  "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.error, "Empty text provided after sanitization");
    }
}

#[tokio::test]
async fn test_text_too_long() {
    let config = ServerConfig {
        max_text_length: Some(10),
        ..ServerConfig::default()
    };
    let app = create_router(build_state(&config).unwrap());

    let response = app
        .oneshot(post_json("/summarize", r#"{"text": "This sentence is too long."}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "Text too long: 26 chars (max: 10)");
}

#[tokio::test]
async fn test_long_text_accepted_by_default() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(3_400);
    assert!(text.chars().count() > 150_000);
    let body = serde_json::json!({ "text": text }).to_string();

    let response = create_test_app()
        .oneshot(post_json("/extract-keywords", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: KeywordsResponse = read_json(response).await;
    assert_eq!(body.keywords, vec!["quick brown fox", "lazy dog"]);
}

#[tokio::test]
async fn test_long_sentences_summarized_by_default() {
    let sentence = |words: &str| format!("{}.", words.repeat(2_200).trim_end());
    let text = [
        sentence("Rivers carry cold water "),
        sentence("Mountains hold deep snow "),
        sentence("Forests shelter quiet birds "),
    ]
    .join(" ");
    assert!(text.chars().count() > 150_000);
    let body = serde_json::json!({ "text": text }).to_string();

    let response = create_test_app()
        .oneshot(post_json("/summarize", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: SummaryResponse = read_json(response).await;
    assert_eq!(body.summary.chars().count(), text.chars().count());
}

#[tokio::test]
async fn test_large_body_accepted_by_default() {
    let text = format!("{}The quick brown fox jumps over the lazy dog.", " ".repeat(3 * 1024 * 1024));
    let body = serde_json::json!({ "text": text }).to_string();
    assert!(body.len() > 3 * 1024 * 1024);

    let response = create_test_app()
        .oneshot(post_json("/extract-keywords", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: KeywordsResponse = read_json(response).await;
    assert_eq!(body.keywords, vec!["quick brown fox", "lazy dog"]);
}

#[tokio::test]
async fn test_body_limit_has_its_own_error() {
    let config = ServerConfig {
        max_body_bytes: Some(1024),
        ..ServerConfig::default()
    };
    let app = create_router(build_state(&config).unwrap());
    let body = serde_json::json!({ "text": "word ".repeat(500) }).to_string();

    let response = app
        .oneshot(post_json("/summarize", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let error: ErrorResponse = read_json(response).await;
    assert_ne!(error.error, "Missing or invalid text parameter");
    assert!(error.error.contains("length limit"));
}

#[tokio::test]
async fn test_repeated_requests_give_identical_bodies() {
    let text = r#"{"text": "<p>Rust is fast.</p><p>Rust is safe. Rust compiles code. Cargo builds Rust crates. They like Rust.</p>"}"#;

    for uri in ["/extract-keywords", "/summarize"] {
        let app = create_test_app();
        let first = app.clone().oneshot(post_json(uri, text)).await.unwrap();
        let second = app.oneshot(post_json(uri, text)).await.unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
        let first = axum::body::to_bytes(first.into_body(), usize::MAX).await.unwrap();
        let second = axum::body::to_bytes(second.into_body(), usize::MAX).await.unwrap();
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .method("POST")
        .uri("/extract-keywords")
        .header("origin", "http://localhost:3000")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"text": "Rust crates compile quickly."}"#))
        .unwrap();

    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/summarize")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let mut request = post_json("/summarize", r#"{"text": "One short sentence."}"#);
    request
        .headers_mut()
        .insert("x-request-id", "req-1234".parse().unwrap());

    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-1234");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let response = create_test_app()
        .oneshot(post_json("/summarize", r#"{"text": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_unknown_route() {
    let response = create_test_app()
        .oneshot(post_json("/translate", r#"{"text": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
