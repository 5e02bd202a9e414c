//! Token Application
//!
//! Projects an effective tree into a style scope as one batched commit.

use crate::scope::StyleScope;
use vitrine_tokens::{TokenTree, project};

/// Project `tree` and commit every pair into `scope` in a single batch.
/// Returns the number of properties written.
pub fn apply_tokens<S: StyleScope>(scope: &mut S, tree: &TokenTree) -> usize {
    let props = project(tree);
    scope.commit(&props);
    tracing::debug!(count = props.len(), "applied css custom properties");
    props.len()
}
