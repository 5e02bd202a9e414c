//! Vitrine Style
//!
//! The boundary to the live document: a style-scope abstraction, batched
//! custom-property commits and a coalescing queue for burst updates.

mod apply;
mod coalesce;
mod scope;

pub use apply::apply_tokens;
pub use coalesce::{Coalescer, CoalesceHandle, DEFAULT_WINDOW, coalescer};
pub use scope::{MemoryScope, StyleScope};
