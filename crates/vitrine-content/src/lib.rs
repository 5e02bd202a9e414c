//! Vitrine Content
//!
//! Remote design-token source, TTL-bounded override cache and the token
//! resolver that produces the effective tree.

mod cache;
mod clock;
mod resolver;
mod source;

pub use cache::{CacheStats, DEFAULT_MAX_ENTRIES, DEFAULT_TTL, OverrideCache, cache_key};
pub use clock::{Clock, SystemClock};
pub use resolver::TokenResolver;
pub use source::{
    ContentSource, DEFAULT_MODEL, EntryParams, HttpContentSource, extract_override,
};

/// Content layer error
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("transport: {0}")]
    Transport(#[from] vitrine_net::NetError),

    #[error("malformed content payload: {0}")]
    Malformed(String),
}
