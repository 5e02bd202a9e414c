//! Commerce Configuration
//!
//! Tenant storefront credentials, injected from the environment at startup.

/// Default storefront API version
pub const DEFAULT_API_VERSION: &str = "2025-01";

/// GraphQL storefront endpoint configuration
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    /// Shop domain, e.g. `example.myshopify.com`
    pub domain: String,
    /// Storefront access token
    pub access_token: String,
    /// API version segment
    pub api_version: String,
}

impl CommerceConfig {
    pub fn new(domain: &str, access_token: &str) -> Self {
        Self {
            domain: domain.to_string(),
            access_token: access_token.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    /// Read configuration from `VITRINE_COMMERCE_DOMAIN`,
    /// `VITRINE_COMMERCE_TOKEN` and `VITRINE_COMMERCE_API_VERSION`.
    /// Returns `None` when domain or token is absent.
    pub fn from_env() -> Option<Self> {
        let domain = std::env::var("VITRINE_COMMERCE_DOMAIN").ok()?;
        let access_token = std::env::var("VITRINE_COMMERCE_TOKEN").ok()?;
        let api_version = std::env::var("VITRINE_COMMERCE_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Some(Self {
            domain,
            access_token,
            api_version,
        })
    }

    /// Both required pieces present
    pub fn is_complete(&self) -> bool {
        !self.domain.is_empty() && !self.access_token.is_empty()
    }

    /// The GraphQL endpoint for this shop
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}/api/{}/graphql.json",
            self.domain, self.api_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = CommerceConfig::new("shop.example.com", "token");
        assert_eq!(
            config.endpoint(),
            "https://shop.example.com/api/2025-01/graphql.json"
        );

        let pinned = config.api_version("2024-10");
        assert_eq!(
            pinned.endpoint(),
            "https://shop.example.com/api/2024-10/graphql.json"
        );
    }

    #[test]
    fn test_is_complete() {
        assert!(CommerceConfig::new("shop.example.com", "token").is_complete());
        assert!(!CommerceConfig::new("", "token").is_complete());
        assert!(!CommerceConfig::new("shop.example.com", "").is_complete());
    }
}
