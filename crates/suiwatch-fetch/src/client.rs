//! HTTP transport for CoinGecko requests.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;
use suiwatch_types::Asset;
use thiserror::Error;

use crate::url::BASE_URL;

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (without trailing slash).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Fixed pause before each upstream request.
    pub request_delay: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Asset to quote.
    pub asset: Asset,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            // The free API tier throttles bursts; space requests out.
            request_delay: Duration::from_millis(1000),
            user_agent: format!("suiwatch/{}", env!("CARGO_PKG_VERSION")),
            asset: Asset::sui(),
        }
    }
}

impl ClientConfig {
    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the pause before each request.
    #[must_use]
    pub const fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Errors raised below the HTTP status level.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection could not be established.
    #[error("Connection error: {0}")]
    Connection(String),
}

impl TransportError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issues GET requests that expect a JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET request, returning the status and body for any status.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a new HTTP client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.request_delay, Duration::from_millis(1000));
        assert_eq!(config.asset, Asset::sui());
        assert!(config.user_agent.starts_with("suiwatch/"));
    }

    #[test]
    fn test_config_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:9000")
            .with_request_delay(Duration::ZERO);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.request_delay, Duration::ZERO);
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "{}").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(429, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::with_defaults();
        assert!(client.is_ok());
    }

    /// Client that ignores proxy settings from the environment.
    fn loopback_client() -> HttpClient {
        HttpClient {
            client: Client::builder().no_proxy().build().unwrap(),
            config: ClientConfig::default(),
        }
    }

    /// Accepts one connection, replies with `response`, and returns the request head.
    async fn serve_once(listener: TcpListener, response: String) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).to_lowercase()
    }

    #[tokio::test]
    async fn test_get_returns_rejected_status_and_sends_json_accept() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = r#"{"status":{"error_code":429}}"#;
        let response = format!(
            "HTTP/1.1 429 Too Many Requests\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let server = tokio::spawn(serve_once(listener, response));

        let response = loopback_client()
            .get(&format!("http://{addr}/simple/price"))
            .await
            .unwrap();

        assert_eq!(response.status, 429);
        assert!(!response.is_success());
        assert_eq!(response.body, body.as_bytes());

        let request = server.await.unwrap();
        assert!(request.starts_with("get /simple/price http/1.1\r\n"));
        assert!(request.contains("\r\naccept: application/json\r\n"));
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = loopback_client().get(&format!("http://{addr}/")).await;
        assert!(matches!(result, Err(TransportError::Connection(_))));
    }
}
