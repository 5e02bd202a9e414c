//! Vitrine CLI - Main Entry Point
//!
//! Resolves the effective design-token tree for the configured tenant and
//! prints the generated `:root` stylesheet. Without a content API key the
//! built-in defaults are printed as-is.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use vitrine_content::{DEFAULT_MODEL, HttpContentSource};
use vitrine_engine::StorefrontConfig;
use vitrine_tokens::to_css;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = StorefrontConfig::from_env();
    tracing::info!(
        tenant = config.tenant_id.as_deref().unwrap_or("unknown"),
        theme = %config.theme,
        "resolving design tokens"
    );

    let model = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let source = HttpContentSource::new()?;
    let mut resolver =
        vitrine_content::TokenResolver::new(config.content_api_key.clone(), source);

    if config.content_api_key.is_some() {
        smol::block_on(resolver.load_override(model.as_str(), &config.theme));
        if let Some(err) = resolver.error() {
            tracing::warn!("{err}, falling back to defaults");
        }
    }

    print!("{}", to_css(resolver.effective_tokens()));

    Ok(())
}
