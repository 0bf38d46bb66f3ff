//! HTTP contract tests over the full router.
//!
//! Runs against in-memory repository implementations, so the full
//! validate → dedupe → allocate → insert pipeline and the body-level
//! error contract are exercised without a database. Hostnames under the
//! reserved `.invalid` TLD are treated as unresolvable.

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Mutex;

use shorturl::prelude::*;

struct InMemoryLinks {
    rows: Mutex<Vec<Link>>,
}

impl InMemoryLinks {
    fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinks {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|l| l.original_url == original_url).cloned())
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<Link>, AppError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|l| l.short_id == short_id).cloned())
    }

    async fn insert(&self, original_url: &str, short_id: i64) -> Result<Link, AppError> {
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|l| l.original_url == original_url) {
            return Err(AppError::Conflict {
                constraint: Some("links_original_url_key".to_string()),
            });
        }
        let link = Link::new(short_id, original_url.to_string(), Utc::now());
        rows.push(link.clone());
        Ok(link)
    }

    async fn ping(&self) -> bool {
        true
    }
}

struct InMemorySequence {
    seq: AtomicI64,
}

impl InMemorySequence {
    fn new() -> Self {
        Self {
            seq: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl SequenceRepository for InMemorySequence {
    async fn next_id(&self) -> Result<i64, AppError> {
        Ok(self.seq.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

struct FakeResolver;

#[async_trait]
impl HostResolver for FakeResolver {
    async fn resolves(&self, host: &str) -> bool {
        !host.ends_with(".invalid")
    }
}

fn test_server() -> TestServer {
    let service = Arc::new(LinkService::new(
        Arc::new(InMemoryLinks::new()),
        Arc::new(InMemorySequence::new()),
        Arc::new(FakeResolver),
    ));
    let app = app_router(AppState::new(service), None);
    TestServer::new(app).expect("router should start")
}

#[tokio::test]
async fn shorten_then_redirect() {
    let server = test_server();

    let response = server
        .post("/api/shorturl")
        .json(&json!({"url": "https://www.example.com"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["original_url"], "https://www.example.com");
    assert_eq!(body["short_url"], 1);

    let redirect = server.get("/api/shorturl/1").await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://www.example.com");
}

#[tokio::test]
async fn resubmission_returns_same_identifier() {
    let server = test_server();

    let first: Value = server
        .post("/api/shorturl")
        .json(&json!({"url": "https://www.example.com"}))
        .await
        .json();

    let second: Value = server
        .post("/api/shorturl")
        .json(&json!({"url": "https://www.example.com"}))
        .await
        .json();

    assert_eq!(first["short_url"], 1);
    assert_eq!(second["short_url"], 1);
}

#[tokio::test]
async fn distinct_urls_get_distinct_sequential_ids() {
    let server = test_server();

    let mut ids = Vec::new();
    for n in 0..5 {
        let body: Value = server
            .post("/api/shorturl")
            .json(&json!({ "url": format!("https://example.com/page/{n}") }))
            .await
            .json();
        ids.push(body["short_url"].as_i64().unwrap());
    }

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 5, "ids must be distinct: {ids:?}");
    assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn form_submission_is_accepted() {
    let server = test_server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.example.com/from-form")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["original_url"], "https://www.example.com/from-form");
    assert_eq!(body["short_url"], 1);
}

#[tokio::test]
async fn malformed_input_is_rejected_at_body_level() {
    let server = test_server();

    for bad in ["notaurl", "ftp://example.com/file", "example.com/no-scheme"] {
        let response = server.post("/api/shorturl").json(&json!({ "url": bad })).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid URL", "input: {bad}");
    }
}

#[tokio::test]
async fn unresolvable_hostname_is_rejected() {
    let server = test_server();

    let response = server
        .post("/api/shorturl")
        .json(&json!({"url": "http://this-domain-does-not-exist.invalid"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid URL");
}

#[tokio::test]
async fn missing_url_field_is_rejected() {
    let server = test_server();

    let response = server.post("/api/shorturl").json(&json!({})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid URL");
}

#[tokio::test]
async fn non_numeric_identifier_never_redirects() {
    let server = test_server();

    let response = server.get("/api/shorturl/abc").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], "Short URL must be a base-10 integer");
}

#[tokio::test]
async fn unknown_identifier_is_a_body_level_not_found() {
    let server = test_server();

    let response = server.get("/api/shorturl/999999").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], "No short URL found for the given input");
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn concurrent_allocations_are_distinct() {
    let sequence = Arc::new(InMemorySequence::new());

    let mut handles = Vec::new();
    for _ in 0..50 {
        let sequence = sequence.clone();
        handles.push(tokio::spawn(async move { sequence.next_id().await }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50, "concurrent callers must never share a value");
}
