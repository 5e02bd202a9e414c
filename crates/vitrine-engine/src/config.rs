//! Storefront Configuration
//!
//! Environment-injected tenant settings. Absent pieces degrade features
//! rather than abort: no content key keeps tokens at defaults, no commerce
//! credentials disable the commerce stores.

use vitrine_commerce::CommerceConfig;

/// Per-tenant storefront configuration
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Tenant identifier, informational
    pub tenant_id: Option<String>,
    /// Credential for the hosted content API
    pub content_api_key: Option<String>,
    /// Active theme name
    pub theme: String,
    /// Commerce backend credentials, when configured
    pub commerce: Option<CommerceConfig>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            tenant_id: None,
            content_api_key: None,
            theme: "default".to_string(),
            commerce: None,
        }
    }
}

impl StorefrontConfig {
    /// Read configuration from `VITRINE_TENANT_ID`, `VITRINE_CONTENT_API_KEY`,
    /// `VITRINE_THEME` and the `VITRINE_COMMERCE_*` variables.
    pub fn from_env() -> Self {
        let tenant_id = std::env::var("VITRINE_TENANT_ID").ok();
        let content_api_key = std::env::var("VITRINE_CONTENT_API_KEY").ok();
        let theme = std::env::var("VITRINE_THEME").unwrap_or_else(|_| "default".to_string());
        let commerce = CommerceConfig::from_env();

        if content_api_key.is_none() {
            tracing::warn!("VITRINE_CONTENT_API_KEY not set, design tokens stay at defaults");
        }
        if commerce.is_none() {
            tracing::warn!("commerce credentials not set, catalog and cart are disabled");
        }

        Self {
            tenant_id,
            content_api_key,
            theme,
            commerce,
        }
    }
}
