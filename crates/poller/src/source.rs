//! Review API access.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use sentinel_common::error::PollError;

/// Source of raw status payloads for a time window starting at `cursor`.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self, cursor: i64) -> Result<Value, PollError>;
}

/// HTTP client for the review status endpoint.
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    /// Render a transport error without the request URL, so the text stays
    /// the same from one window to the next.
    fn describe_transport_error(&self, err: reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request to {} timed out", self.endpoint)
        } else if err.is_connect() {
            format!("could not connect to {}", self.endpoint)
        } else {
            err.without_url().to_string()
        }
    }
}

#[async_trait]
impl StatusSource for ApiClient {
    async fn fetch(&self, cursor: i64) -> Result<Value, PollError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", cursor)])
            .send()
            .await
            .map_err(|e| PollError::UpstreamUnavailable(self.describe_transport_error(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::UpstreamUnavailable(format!(
                "{} answered HTTP {}",
                self.endpoint, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PollError::UpstreamUnavailable(self.describe_transport_error(e)))?;

        serde_json::from_str(&body)
            .map_err(|e| PollError::Unexpected(format!("response body is not valid JSON: {e}")))
    }
}
