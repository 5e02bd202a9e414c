//! Token Resolver
//!
//! Owns the default tree, the current remote override and the merged
//! effective tree. All failures are recorded and degrade to defaults;
//! nothing here propagates an error to the caller.

use crate::cache::{OverrideCache, cache_key};
use crate::clock::{Clock, SystemClock};
use crate::source::{ContentSource, EntryParams, extract_override};
use std::time::SystemTime;
use vitrine_tokens::{TokenTree, default_tokens, get_path, merge};

/// Resolves the effective token tree from defaults plus remote overrides
pub struct TokenResolver<S: ContentSource, C: Clock = SystemClock> {
    api_key: Option<String>,
    source: S,
    cache: OverrideCache<C>,
    defaults: TokenTree,
    override_tree: Option<TokenTree>,
    current_theme: String,
    last_cache_key: Option<String>,
    error: Option<String>,
    last_updated: Option<SystemTime>,
    loading: bool,
    memo: Option<(String, TokenTree)>,
}

impl<S: ContentSource> TokenResolver<S, SystemClock> {
    pub fn new(api_key: Option<String>, source: S) -> Self {
        Self::with_cache(api_key, source, OverrideCache::new())
    }
}

impl<S: ContentSource, C: Clock> TokenResolver<S, C> {
    pub fn with_cache(api_key: Option<String>, source: S, cache: OverrideCache<C>) -> Self {
        Self {
            api_key,
            source,
            cache,
            defaults: default_tokens(),
            override_tree: None,
            current_theme: "default".to_string(),
            last_cache_key: None,
            error: None,
            last_updated: None,
            loading: false,
            memo: None,
        }
    }

    /// Load the override tree for (model, theme).
    ///
    /// Without a usable credential this is a no-op warning. An unexpired
    /// cache entry is returned without a network round trip. Transport and
    /// shape failures record an error message and keep the previous
    /// override, so the effective tree falls back to the last known state.
    pub async fn load_override(&mut self, model: &str, theme: &str) {
        let Some(api_key) = self.api_key.clone().filter(|key| !key.is_empty()) else {
            tracing::warn!("content API key not configured, design tokens stay at defaults");
            return;
        };

        let key = cache_key(model, theme, Some(&api_key));

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(cache_key = %key, "design tokens served from cache");
            self.override_tree = Some(cached.clone());
            self.last_cache_key = Some(key);
            self.current_theme = theme.to_string();
            self.error = None;
            return;
        }

        self.loading = true;
        self.error = None;

        let params = EntryParams::new(&api_key).model(model).theme(theme);
        match self.source.fetch_entry(&params).await {
            Ok(Some(data)) => {
                let tree = extract_override(&data);
                tracing::info!(cache_key = %key, groups = tree.len(), "design tokens loaded");
                self.cache.insert(key.clone(), tree.clone());
                self.override_tree = Some(tree);
                self.last_cache_key = Some(key);
                self.current_theme = theme.to_string();
                self.last_updated = Some(SystemTime::now());
                // A refetch under an unchanged key must still replace the
                // memoized merge
                self.memo = None;
            }
            Ok(None) => {
                tracing::info!(model, "no design tokens configured, keeping defaults");
            }
            Err(err) => {
                let message = format!("Failed to load design tokens: {err}");
                tracing::error!("{message}");
                self.error = Some(message);
            }
        }

        self.loading = false;
    }

    /// The merged effective tree, memoized per cache key
    pub fn effective_tokens(&mut self) -> &TokenTree {
        let key = self
            .last_cache_key
            .clone()
            .unwrap_or_else(|| "default".to_string());

        let fresh = matches!(&self.memo, Some((memo_key, _)) if *memo_key == key);
        if !fresh {
            let tree = match &self.override_tree {
                Some(overlay) => merge(&self.defaults, overlay),
                None => self.defaults.clone(),
            };
            self.memo = Some((key, tree));
        }

        match &self.memo {
            Some((_, tree)) => tree,
            None => &self.defaults,
        }
    }

    /// Look up one effective token by dotted path
    pub fn token_value(&mut self, path: &str) -> Option<String> {
        get_path(self.effective_tokens(), path).map(str::to_string)
    }

    /// Drop the override cache, memoized tree and counters
    pub fn invalidate(&mut self) {
        self.cache.clear();
        self.memo = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_theme(&self) -> &str {
        &self.current_theme
    }

    pub fn last_updated(&self) -> Option<SystemTime> {
        self.last_updated
    }

    pub fn has_override(&self) -> bool {
        self.override_tree.is_some()
    }

    pub fn cache_stats(&self) -> crate::cache::CacheStats {
        self.cache.stats()
    }
}
