// Figure SDK - A client library for the Figure upload hosting service
// Copyright (C) 2025 Figure SDK Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! HTTP transport used by the client
//!
//! The client talks to the network only through the [`Transport`] trait so
//! that connection handling and TLS stay outside the SDK. [`HttpTransport`]
//! is the reqwest-backed default.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{FigureError, Result};
use crate::log_api_call;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A completed HTTP exchange
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    url: String,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// URL the request was sent to, without its query string
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`FigureError::UnexpectedStatus`] unless the status is `code`
    pub fn expect(self, code: u16) -> Result<Self> {
        if self.status == code {
            Ok(self)
        } else {
            Err(FigureError::UnexpectedStatus {
                status: self.status,
                url: self.url,
            })
        }
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(FigureError::Decode)
    }
}

/// Sends a single request and waits for the full response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, url: &str, query: &[(&str, &str)]) -> Result<Response>;
}

/// Settings for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Timeout for a whole request
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("figure-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&TransportConfig::default())
    }

    pub fn with_config(config: &TransportConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let mut request_url =
            Url::parse(url).map_err(|e| FigureError::InvalidEndpoint(format!("{}: {}", url, e)))?;
        let path = request_url.path().to_string();

        if !query.is_empty() {
            request_url.query_pairs_mut().extend_pairs(query);
        }

        log_api_call!(method.as_str(), path.as_str());
        let started = Instant::now();

        let response = self.http.request(method.clone(), request_url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        log_api_call!(
            method.as_str(),
            path.as_str(),
            started.elapsed().as_millis() as u64
        );
        debug!(status, bytes = body.len(), "Response received");

        Ok(Response::new(status, url, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_expect_matching_status() {
        let response = Response::new(200, "https://host/a.json", b"{}".to_vec());
        assert!(response.expect(200).is_ok());
    }

    #[test]
    fn test_expect_other_status() {
        let response = Response::new(404, "https://host/a.json", b"not json".to_vec());
        match response.expect(200) {
            Err(FigureError::UnexpectedStatus { status, url }) => {
                assert_eq!(status, 404);
                assert_eq!(url, "https://host/a.json");
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_json_decode_error() {
        let response = Response::new(200, "https://host/a.json", b"<html>".to_vec());
        let result: Result<serde_json::Value> = response.json();
        assert!(matches!(result, Err(FigureError::Decode(_))));
    }

    #[test]
    fn test_is_success() {
        assert!(Response::new(204, "u", Vec::new()).is_success());
        assert!(!Response::new(302, "u", Vec::new()).is_success());
        assert!(!Response::new(500, "u", Vec::new()).is_success());
    }

    #[tokio::test]
    async fn test_http_transport_sends_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/upload/retrieve/9.json")
                    .query_param("token", "tok-1");
                then.status(200).json_body(json!({ "payload": { "type": "image", "media": {} } }));
            })
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = server.url("/upload/retrieve/9.json");
        let response = transport
            .send(Method::GET, &url, &[("token", "tok-1")])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.url(), url);

        let body: serde_json::Value = response.json().unwrap();
        assert_eq!(body["payload"]["type"], "image");
    }

    #[tokio::test]
    async fn test_http_transport_reports_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing.json");
                then.status(404).body("Not Found");
            })
            .await;

        let transport = HttpTransport::with_config(&TransportConfig {
            timeout: Duration::from_secs(5),
            ..Default::default()
        })
        .unwrap();

        let response = transport
            .send(Method::GET, &server.url("/missing.json"), &[])
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert_eq!(response.body(), b"Not Found");
    }

    #[tokio::test]
    async fn test_http_transport_rejects_bad_url() {
        let transport = HttpTransport::new().unwrap();
        let result = transport.send(Method::GET, "not a url", &[]).await;
        assert!(matches!(result, Err(FigureError::InvalidEndpoint(_))));
    }
}
