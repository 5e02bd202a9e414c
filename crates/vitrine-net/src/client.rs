//! HTTP Client
//!
//! Builder-configured wrapper over reqwest with JSON helpers. Every call
//! returns a parsed JSON document or a `NetError`; non-2xx statuses are
//! hard failures for the call.

use crate::NetError;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Request timeout
    pub request_timeout: Duration,
    /// Headers attached to every request
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: "Vitrine/0.1".into(),
            request_timeout: Duration::from_secs(30),
            default_headers: Vec::new(),
        }
    }
}

/// HTTP client builder
#[derive(Default)]
pub struct HttpClientBuilder {
    config: ClientConfig,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.config.user_agent = ua.to_string();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        self.config
            .default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> Result<HttpClient, NetError> {
        let inner = reqwest::Client::builder()
            .user_agent(self.config.user_agent.clone())
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|e| NetError::Network(e.to_string()))?;

        Ok(HttpClient {
            inner,
            config: self.config,
        })
    }
}

/// HTTP client
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client with default settings
    pub fn new() -> Result<Self, NetError> {
        Self::builder().build()
    }

    /// Create a client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET a URL and parse the body as JSON
    pub async fn get_json(&self, url: &str) -> Result<Value, NetError> {
        let url = parse_url(url)?;
        tracing::info!("HTTP GET {url}");

        let mut req = self.inner.get(url);
        for (name, value) in &self.config.default_headers {
            req = req.header(name, value);
        }

        Self::read_json(req).await
    }

    /// POST a JSON body and parse the response as JSON
    pub async fn post_json(
        &self,
        url: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> Result<Value, NetError> {
        let url = parse_url(url)?;
        tracing::info!("HTTP POST {url}");

        let mut req = self.inner.post(url).json(body);
        for (name, value) in self.config.default_headers.iter().chain(headers) {
            req = req.header(name, value);
        }

        Self::read_json(req).await
    }

    async fn read_json(req: reqwest::RequestBuilder) -> Result<Value, NetError> {
        let response = req
            .send()
            .await
            .map_err(|e| NetError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| NetError::Network(e.to_string()))
    }
}

fn parse_url(url: &str) -> Result<Url, NetError> {
    let parsed = Url::parse(url).map_err(|e| NetError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(NetError::InvalidUrl(format!("unsupported scheme: {other}"))),
    }
}
