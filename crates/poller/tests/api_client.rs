//! ApiClient tests against a local Axum server.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;

use sentinel_common::error::PollError;
use sentinel_poller::source::{ApiClient, StatusSource};

const TOKEN: &str = "test-token";

async fn statuses(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("OAuth {TOKEN}"));
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let from_date = params.get("from_date").cloned().unwrap_or_default();
    Json(json!({
        "updates": [{"name": "hw1", "status": "approved"}],
        "from_date": from_date,
    }))
    .into_response()
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/statuses", get(statuses))
        .route(
            "/down",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route("/text", get(|| async { "<html>maintenance</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(endpoint: String, token: &str) -> ApiClient {
    ApiClient::new(endpoint, token.to_string(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_token_and_cursor() {
    let addr = spawn_server().await;
    let api = client(format!("http://{addr}/statuses"), TOKEN);

    let payload = api.fetch(1_700_000_000).await.unwrap();

    assert_eq!(payload["from_date"], "1700000000");
    assert_eq!(payload["updates"][0]["name"], "hw1");
}

#[tokio::test]
async fn test_non_success_status_is_upstream_unavailable() {
    let addr = spawn_server().await;
    let endpoint = format!("http://{addr}/down");
    let api = client(endpoint.clone(), TOKEN);

    let err = api.fetch(0).await.unwrap_err();

    assert_eq!(
        err,
        PollError::UpstreamUnavailable(format!("{endpoint} answered HTTP 503 Service Unavailable"))
    );
}

#[tokio::test]
async fn test_wrong_token_is_upstream_unavailable() {
    let addr = spawn_server().await;
    let api = client(format!("http://{addr}/statuses"), "wrong");

    let err = api.fetch(0).await.unwrap_err();

    assert!(matches!(err, PollError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_non_json_body_is_unexpected() {
    let addr = spawn_server().await;
    let api = client(format!("http://{addr}/text"), TOKEN);

    let err = api.fetch(0).await.unwrap_err();

    assert!(matches!(err, PollError::Unexpected(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_message_is_stable_across_windows() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(format!("http://{addr}/statuses"), TOKEN);

    let first = api.fetch(100).await.unwrap_err();
    let second = api.fetch(200).await.unwrap_err();

    assert!(matches!(first, PollError::UpstreamUnavailable(_)));
    assert_eq!(first, second);
}
