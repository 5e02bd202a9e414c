//! Vitrine Commerce
//!
//! Cart/catalog synchronization against a GraphQL storefront API. The
//! remote store is the source of truth: reads are cached in memory,
//! mutations replace the whole local snapshot from the response payload.

mod cart;
mod catalog;
mod config;
mod normalize;
mod persist;
pub mod queries;
mod transport;
mod types;

#[cfg(test)]
mod test_support;

pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use config::CommerceConfig;
pub use persist::{CART_ID_KEY, CartIdStore, FileCartIdStore, MemoryCartIdStore};
pub use transport::{CommerceTransport, HttpTransport};
pub use types::{Cart, CartLine, Collection, Product, ProductFilterOptions, SortOption};

/// Commerce layer error
#[derive(Debug, thiserror::Error)]
pub enum CommerceError {
    #[error("commerce configuration is missing")]
    ConfigMissing,

    #[error("transport: {0}")]
    Transport(#[from] vitrine_net::NetError),

    #[error("response payload missing {0}")]
    MissingPayload(&'static str),
}
