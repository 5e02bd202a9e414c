//! Remote Token Source
//!
//! Client for the hosted content API that stores the partial token override
//! document. A response without a content payload means "no override
//! configured", not an error.

use crate::ContentError;
use serde_json::Value;
use url::Url;
use vitrine_net::HttpClient;
use vitrine_tokens::{TokenTree, tree_from_json};

/// Default content model holding the token document
pub const DEFAULT_MODEL: &str = "design-tokens";

const DEFAULT_BASE_URL: &str = "https://cdn.builder.io/api/v3/content";

/// Parameters for one entry fetch
#[derive(Debug, Clone)]
pub struct EntryParams {
    /// Content model name
    pub model: String,
    /// API credential
    pub api_key: String,
    /// Resolve references server-side
    pub include_refs: bool,
    /// Bypass intermediate HTTP caching
    pub cachebust: bool,
    /// Theme user-attribute, when targeting a non-default theme
    pub theme: Option<String>,
}

impl EntryParams {
    pub fn new(api_key: &str) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.to_string(),
            include_refs: true,
            cachebust: false,
            theme: None,
        }
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn cachebust(mut self, cachebust: bool) -> Self {
        self.cachebust = cachebust;
        self
    }

    /// Target a theme. `"default"` maps to no attribute at all.
    pub fn theme(mut self, theme: &str) -> Self {
        self.theme = (theme != "default").then(|| theme.to_string());
        self
    }
}

/// A source of token override documents
pub trait ContentSource {
    /// Fetch one entry. `Ok(None)` means the model has no content.
    fn fetch_entry(
        &self,
        params: &EntryParams,
    ) -> impl Future<Output = Result<Option<Value>, ContentError>>;
}

/// Content source backed by the hosted content API
pub struct HttpContentSource {
    client: HttpClient,
    base_url: String,
}

impl HttpContentSource {
    pub fn new() -> Result<Self, ContentError> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the source at a different endpoint (tests, staging)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn entry_url(&self, params: &EntryParams) -> Result<String, ContentError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, params.model))
            .map_err(|e| ContentError::Malformed(e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apiKey", &params.api_key);
            query.append_pair("limit", "1");
            query.append_pair("includeRefs", if params.include_refs { "true" } else { "false" });
            query.append_pair("cachebust", if params.cachebust { "true" } else { "false" });
            if let Some(theme) = &params.theme {
                query.append_pair("userAttributes.theme", theme);
            }
        }

        Ok(url.into())
    }
}

impl ContentSource for HttpContentSource {
    async fn fetch_entry(&self, params: &EntryParams) -> Result<Option<Value>, ContentError> {
        let url = self.entry_url(params)?;
        let doc = self.client.get_json(&url).await?;

        // Query endpoint shape: { results: [ { data: {...} } ] }.
        if let Some(results) = doc.get("results").and_then(Value::as_array) {
            return Ok(results.first().and_then(|entry| entry.get("data")).cloned());
        }

        // Single-entry shape: { data: {...} }. No data means no tokens.
        Ok(doc.get("data").cloned())
    }
}

/// Pull the override tree out of an entry's `data` payload: either a
/// `tokens` field or the token tree directly.
pub fn extract_override(data: &Value) -> TokenTree {
    match data.get("tokens") {
        Some(tokens) => tree_from_json(tokens),
        None => tree_from_json(data),
    }
}
