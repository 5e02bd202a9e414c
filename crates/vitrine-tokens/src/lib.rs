//! Vitrine Design Tokens
//!
//! Token tree data model, deep merge and CSS custom-property projection.

mod css;
mod defaults;
mod merge;
mod node;
mod project;

pub use css::to_css;
pub use defaults::default_tokens;
pub use merge::merge;
pub use node::{TokenGroup, TokenNode, TokenTree, get_path, tree_from_json};
pub use project::{CssProperty, project, project_sections};
