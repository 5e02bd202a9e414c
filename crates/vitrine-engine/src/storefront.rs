//! Storefront Facade
//!
//! Owns the token resolver, the style scope and the coalescing queue.
//! Token refreshes follow one path: load override, take the effective
//! tree, project it, commit the projection as a single batch.

use vitrine_content::{ContentSource, TokenResolver};
use vitrine_style::{
    Coalescer, CoalesceHandle, DEFAULT_WINDOW, StyleScope, apply_tokens, coalescer,
};

use crate::config::StorefrontConfig;

/// A storefront session bound to one style scope
pub struct Storefront<S: ContentSource, P: StyleScope> {
    config: StorefrontConfig,
    resolver: TokenResolver<S>,
    scope: P,
    refresh_handle: CoalesceHandle,
    refresh_queue: Coalescer,
}

impl<S: ContentSource, P: StyleScope> Storefront<S, P> {
    pub fn new(config: StorefrontConfig, source: S, scope: P) -> Self {
        let resolver = TokenResolver::new(config.content_api_key.clone(), source);
        let (refresh_handle, refresh_queue) = coalescer(DEFAULT_WINDOW);

        Self {
            config,
            resolver,
            scope,
            refresh_handle,
            refresh_queue,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn scope(&self) -> &P {
        &self.scope
    }

    pub fn resolver(&mut self) -> &mut TokenResolver<S> {
        &mut self.resolver
    }

    /// Handle for signalling that tokens should be refreshed. Bursts of
    /// signals collapse into one refresh per debounce window.
    pub fn refresh_handle(&self) -> CoalesceHandle {
        self.refresh_handle.clone()
    }

    /// Paint the built-in defaults before any remote data is available
    pub fn apply_defaults(&mut self) -> usize {
        let tree = self.resolver.effective_tokens().clone();
        apply_tokens(&mut self.scope, &tree)
    }

    /// Load the override for `model`, then project and commit the merged
    /// tree in one batch. Degrades to the last known tree on failure.
    pub async fn refresh_tokens(&mut self, model: &str) -> usize {
        let theme = self.config.theme.clone();
        self.resolver.load_override(model, &theme).await;

        let tree = self.resolver.effective_tokens().clone();
        let count = apply_tokens(&mut self.scope, &tree);
        tracing::debug!(model, %theme, count, "storefront tokens refreshed");
        count
    }

    /// Run coalesced refreshes until every handle is dropped. Each batch of
    /// signals results in exactly one refresh.
    pub async fn run_refresh_loop(&mut self, model: &str) {
        while self.refresh_queue.wait().await {
            self.refresh_tokens(model).await;
        }
    }
}
