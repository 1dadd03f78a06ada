//! Integration tests against a local mock of the FastForex `historical` endpoint.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use conversion_types::{ConversionDate, CurrencyCode, ProviderError, RateProvider};
use fastforex_client::FastForexClient;
use tokio::net::TcpListener;

const API_KEY: &str = "test-key";

/// Answers EUR -> BGN on 2024-06-08 and rejects anything else.
async fn historical(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("api_key").map(String::as_str) != Some(API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Invalid API key" })),
        )
            .into_response();
    }

    let date = params.get("date").cloned().unwrap_or_default();
    let from = params.get("from").cloned().unwrap_or_default();
    let to = params.get("to").cloned().unwrap_or_default();

    match (date.as_str(), from.as_str(), to.as_str()) {
        ("2024-06-08", "EUR", "BGN") => Json(serde_json::json!({
            "date": date,
            "base": from,
            "results": { "BGN": 1.9558 },
            "ms": 4
        }))
        .into_response(),
        ("2024-06-08", "EUR", "USD") => Json(serde_json::json!({
            "date": date,
            "base": from,
            "results": { "GBP": 0.85 },
            "ms": 4
        }))
        .into_response(),
        (_, "XXX", _) => "not json".into_response(),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Unsupported pair" })),
        )
            .into_response(),
    }
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(2)).await;
    "{}"
}

async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn mock_provider() -> String {
    spawn_server(Router::new().route("/historical", get(historical))).await
}

fn date(s: &str) -> ConversionDate {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    ConversionDate::resolve(s, today).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_raw_rate() {
    let url = mock_provider().await;
    let client = FastForexClient::new(url, API_KEY).unwrap();

    let quote = client
        .fetch(date("2024-06-08"), CurrencyCode::EUR, CurrencyCode::BGN)
        .await
        .unwrap();

    assert_eq!(quote.rate, 1.9558);
    assert_eq!(quote.base, CurrencyCode::EUR);
    assert_eq!(quote.target, CurrencyCode::BGN);
    assert_eq!(quote.date.to_string(), "2024-06-08");
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let url = mock_provider().await;
    let client = FastForexClient::new(url, "wrong-key").unwrap();

    let err = client
        .fetch(date("2024-06-08"), CurrencyCode::EUR, CurrencyCode::BGN)
        .await
        .unwrap_err();

    match err {
        ProviderError::Api { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unsupported_pair_is_api_error() {
    let url = mock_provider().await;
    let client = FastForexClient::new(url, API_KEY).unwrap();

    let err = client
        .fetch(date("2024-06-07"), CurrencyCode::EUR, CurrencyCode::BGN)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Api { status: 400, .. }));
}

#[tokio::test]
async fn test_missing_target_in_results() {
    let url = mock_provider().await;
    let client = FastForexClient::new(url, API_KEY).unwrap();

    let err = client
        .fetch(date("2024-06-08"), CurrencyCode::EUR, CurrencyCode::USD)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::MissingRate(CurrencyCode::EUR, CurrencyCode::USD)
    ));
}

#[tokio::test]
async fn test_non_json_body() {
    let url = mock_provider().await;
    let client = FastForexClient::new(url, API_KEY).unwrap();

    let err = client
        .fetch(date("2024-06-08"), CurrencyCode::XXX, CurrencyCode::EUR)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidBody(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = FastForexClient::new(format!("http://{addr}"), API_KEY).unwrap();
    let err = client
        .fetch(date("2024-06-08"), CurrencyCode::EUR, CurrencyCode::BGN)
        .await
        .unwrap_err();

    match err {
        ProviderError::Transport(message) => assert!(!message.contains(API_KEY)),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let url = spawn_server(Router::new().route("/historical", get(slow))).await;
    let client =
        FastForexClient::with_timeout(url, API_KEY, Duration::from_millis(100)).unwrap();

    let err = client
        .fetch(date("2024-06-08"), CurrencyCode::EUR, CurrencyCode::BGN)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Transport(_)));
}
