//! Commerce Transport
//!
//! The GraphQL execution seam. Stores talk to a `CommerceTransport` so tests
//! can substitute canned payloads for the real endpoint.

use serde_json::{Value, json};
use vitrine_net::HttpClient;

use crate::CommerceError;
use crate::config::CommerceConfig;

/// Executes GraphQL documents against the storefront endpoint
pub trait CommerceTransport {
    fn execute(
        &self,
        query: &str,
        variables: Value,
    ) -> impl Future<Output = Result<Value, CommerceError>>;
}

/// Transport over HTTP POST with the storefront access token header
pub struct HttpTransport {
    client: HttpClient,
    config: CommerceConfig,
}

impl HttpTransport {
    pub fn new(client: HttpClient, config: CommerceConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &CommerceConfig {
        &self.config
    }
}

impl CommerceTransport for HttpTransport {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, CommerceError> {
        if !self.config.is_complete() {
            tracing::error!("commerce configuration is missing");
            return Err(CommerceError::ConfigMissing);
        }

        let body = json!({ "query": query, "variables": variables });
        let headers = [(
            "X-Shopify-Storefront-Access-Token".to_string(),
            self.config.access_token.clone(),
        )];

        let response = self
            .client
            .post_json(&self.config.endpoint(), &body, &headers)
            .await?;

        Ok(response)
    }
}
