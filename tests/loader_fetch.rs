//! One-shot dataset fetch against a mock HTTP endpoint.

mod common;

use async_trait::async_trait;
use common::mock_backend::{MockBackend, MockResponse, COUNTRIES_PATH};
use common::{free_port, COUNTRIES_JSON};
use countrydeck::catalog::CountryRecord;
use countrydeck::config::SourceConfig;
use countrydeck::loader::{spawn_load, CountrySource, LoadError, RestCountriesClient};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use tokio::runtime::Handle;

fn source_for(endpoint: String, timeout_seconds: u32) -> SourceConfig {
    SourceConfig {
        endpoint,
        timeout_seconds,
        connect_timeout_seconds: 2,
    }
}

#[tokio::test]
async fn test_fetch_decodes_dataset_with_single_get() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(COUNTRIES_JSON))
        .await;

    let client = RestCountriesClient::new(&source_for(backend.endpoint(), 5)).unwrap();
    let records = client.fetch_all().await.unwrap();
    assert_eq!(records.len(), 18);
    assert_eq!(records[0].name.common, "France");

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, COUNTRIES_PATH);
    assert_eq!(requests[0].header("accept"), Some("application/json"));
}

#[tokio::test]
async fn test_non_ok_status_is_load_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "Internal Server Error"))
        .await;

    let client = RestCountriesClient::new(&source_for(backend.endpoint(), 5)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 500 }));
    assert_eq!(err.user_message(), "Failed to fetch countries data");
    assert!(err.details().contains("500"));
}

#[tokio::test]
async fn test_not_found_is_load_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(404, "Not Found"))
        .await;

    let client = RestCountriesClient::new(&source_for(backend.endpoint(), 5)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404 }));
}

#[tokio::test]
async fn test_undecodable_body_is_load_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::text("<html>maintenance</html>"))
        .await;

    let client = RestCountriesClient::new(&source_for(backend.endpoint(), 5)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
}

#[tokio::test]
async fn test_object_instead_of_array_is_load_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"status": 200}"#))
        .await;

    let client = RestCountriesClient::new(&source_for(backend.endpoint(), 5)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(COUNTRIES_JSON).with_delay(2_500))
        .await;

    let client = RestCountriesClient::new(&source_for(backend.endpoint(), 1)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    assert!(matches!(err, LoadError::Timeout { duration: 1 }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_failure() {
    let endpoint = format!("http://127.0.0.1:{}{}", free_port(), COUNTRIES_PATH);
    let client = RestCountriesClient::new(&source_for(endpoint.clone(), 5)).unwrap();
    let err = client.fetch_all().await.unwrap_err();
    match err {
        LoadError::Transport { endpoint: reported, .. } => assert_eq!(reported, endpoint),
        other => panic!("expected transport failure, got {other:?}"),
    }
}

/// Counts calls so the test can prove there is no retry.
struct CountingSource {
    calls: AtomicUsize,
}

#[async_trait]
impl CountrySource for CountingSource {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(LoadError::Status { status: 503 })
    }
}

#[tokio::test]
async fn test_spawn_load_reports_once_without_retry() {
    let source = Arc::new(CountingSource {
        calls: AtomicUsize::new(0),
    });
    let (tx, rx) = mpsc::channel();

    let task = spawn_load(&Handle::current(), source.clone(), move |result| {
        let _ = tx.send(result);
    });
    task.await.unwrap();

    let result = rx.recv().unwrap();
    assert!(matches!(result, Err(LoadError::Status { status: 503 })));
    assert!(rx.try_recv().is_err());
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}
