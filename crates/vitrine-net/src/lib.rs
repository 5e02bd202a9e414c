//! Vitrine Networking
//!
//! Thin HTTP/JSON client shared by the content and commerce layers.

mod client;

pub use client::{ClientConfig, HttpClient, HttpClientBuilder};

/// Network error
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
