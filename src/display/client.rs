//! HTTP side of the display client.

use super::view::ViewState;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Path served by the API service.
pub const DATA_PATH: &str = "/api/data";

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid JSON from backend: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Fetches the data envelope from one API base URL.
#[derive(Clone, Debug)]
pub struct DisplayClient {
    http: reqwest::Client,
    base_url: String,
}

impl DisplayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn data_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), DATA_PATH)
    }

    /// Fetch and parse the envelope without interpreting it.
    pub async fn fetch_data(&self) -> Result<Value, DisplayError> {
        let url = self.data_url();
        debug!("fetching {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(DisplayError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// One fetch on start-up. Never fails: errors land in `ViewState::Failed`.
    pub async fn load(&self) -> ViewState {
        match self.fetch_data().await {
            Ok(value) => ViewState::Loaded(value),
            Err(err) => {
                warn!("could not load data from {}: {}", self.data_url(), err);
                ViewState::Failed(err.to_string())
            }
        }
    }
}

/// Prefer the backend's `{"error": ...}` message, else the status reason.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode as AxumStatus, response::IntoResponse, routing::get};
    use serde_json::json;

    fn sample_envelope() -> Value {
        json!({
            "message": "Hello from Backend!",
            "db_time": "2024-05-01T12:30:00Z",
            "minio_buckets": [{ "name": "assets", "creationDate": null }]
        })
    }

    async fn ok_handler() -> impl IntoResponse {
        Json(sample_envelope())
    }

    async fn failing_handler() -> impl IntoResponse {
        (
            AxumStatus::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "connection refused" })),
        )
    }

    async fn garbage_handler() -> impl IntoResponse {
        "not json"
    }

    async fn spawn_test_server(app: Router) -> (String, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        (format!("http://{address}"), join_handle)
    }

    #[test]
    fn data_url_joins_base_and_path() {
        assert_eq!(
            DisplayClient::new("http://localhost:3000/").data_url(),
            "http://localhost:3000/api/data"
        );
        assert_eq!(
            DisplayClient::new("http://backend").data_url(),
            "http://backend/api/data"
        );
    }

    #[tokio::test]
    async fn successful_fetch_renders_exact_json() {
        let (base, server_task) =
            spawn_test_server(Router::new().route(DATA_PATH, get(ok_handler))).await;

        let state = DisplayClient::new(base).load().await;

        assert_eq!(state, ViewState::Loaded(sample_envelope()));
        let expected = serde_json::to_string_pretty(&sample_envelope()).unwrap();
        assert!(state.render_html("app").contains(&format!("<pre>{}</pre>", expected)));

        server_task.abort();
    }

    #[tokio::test]
    async fn refused_connection_leaves_data_null() {
        // Grab a free port, then close it so the connection is refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let state = DisplayClient::new(format!("http://{address}")).load().await;

        assert_eq!(state.data(), None);
        assert!(state.error().unwrap().starts_with("request failed"));
        assert!(state.render_html("app").contains("<pre>null</pre>"));
    }

    #[tokio::test]
    async fn server_error_surfaces_backend_message() {
        let (base, server_task) =
            spawn_test_server(Router::new().route(DATA_PATH, get(failing_handler))).await;

        let client = DisplayClient::new(base);
        match client.fetch_data().await {
            Err(DisplayError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "connection refused");
            }
            other => panic!("expected status error, got {:?}", other),
        }
        assert_eq!(client.load().await.data(), None);

        server_task.abort();
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let (base, server_task) =
            spawn_test_server(Router::new().route(DATA_PATH, get(garbage_handler))).await;

        let err = DisplayClient::new(base).fetch_data().await.unwrap_err();
        assert!(matches!(err, DisplayError::Decode(_)));

        server_task.abort();
    }

    #[test]
    fn error_message_falls_back_to_status_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, b"<html>"),
            "Bad Gateway"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error":"db down"}"#),
            "db down"
        );
    }
}
