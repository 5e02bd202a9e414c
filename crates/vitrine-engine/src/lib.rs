//! Vitrine Engine
//!
//! Top-level facade wiring the token resolver, style application and
//! commerce stores together for a storefront session.

mod config;
mod storefront;

pub use config::StorefrontConfig;
pub use storefront::Storefront;
