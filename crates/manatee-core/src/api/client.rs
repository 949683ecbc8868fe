//! HTTP client for the Trello REST API.
//!
//! `ApiClient` sends exactly one request per call and maps non-success
//! statuses to [`ApiError`]. Queuing lives in the request processor.

use std::time::Duration;

use reqwest::{header, multipart, Client};
use tracing::debug;

use crate::auth::Authorization;

use super::{ApiError, RestFile, RestRequest};

/// API client for Trello.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url` (e.g. `https://api.trello.com/1`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Send one request and return the raw response body.
    pub async fn send(&self, request: RestRequest, auth: &Authorization) -> Result<String, ApiError> {
        let RestRequest { endpoint, file } = request;
        let url = self.url(&endpoint.path);

        debug!(method = %endpoint.method, path = %endpoint.path, "Sending request");

        let mut builder = self
            .client
            .request(endpoint.method.clone(), &url)
            .header(header::ACCEPT, "application/json")
            .query(&auth.query_pairs())
            .query(&endpoint.params);

        if let Some(RestFile { content, file_name }) = file {
            let part = multipart::Part::bytes(content).file_name(file_name);
            builder = builder.multipart(multipart::Form::new().part(RestFile::PARAMETER_KEY, part));
        }

        let response = builder.send().await?;
        let response = Self::check_response(response).await?;
        let body = response.text().await?;

        debug!(path = %endpoint.path, bytes = body.len(), "Response received");
        Ok(body)
    }
}
