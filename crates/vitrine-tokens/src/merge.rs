//! Token Merge Engine
//!
//! Right-biased recursive deep merge of a partial override tree over the
//! fully-populated default tree.

use crate::node::{TokenNode, TokenTree};

/// Deep-merge `overlay` over `base`, producing one effective tree.
///
/// For every key in the overlay: when both sides are groups the merge
/// recurses, otherwise the overlay value replaces the base value wholesale
/// (a differently-shaped scale replaces the whole scale). Keys present only
/// in the base are preserved unchanged, in base order; overlay-only keys are
/// appended. Applying the same overlay twice is a no-op.
pub fn merge(base: &TokenTree, overlay: &TokenTree) -> TokenTree {
    let mut merged = base.clone();

    for (key, overlay_node) in overlay {
        let next = match (merged.get(key), overlay_node) {
            (Some(TokenNode::Group(base_group)), TokenNode::Group(overlay_group)) => {
                TokenNode::Group(merge(base_group, overlay_group))
            }
            _ => overlay_node.clone(),
        };
        merged.insert(key.clone(), next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_tokens;
    use crate::node::{get_path, tree_from_json};
    use serde_json::json;

    #[test]
    fn test_empty_overlay_is_identity() {
        let base = default_tokens();
        assert_eq!(merge(&base, &TokenTree::new()), base);
    }

    #[test]
    fn test_nested_override_wins() {
        let base = default_tokens();
        let overlay = tree_from_json(&json!({
            "colors": { "primary": { "500": "#ff0000" } }
        }));

        let effective = merge(&base, &overlay);

        assert_eq!(get_path(&effective, "colors.primary.500"), Some("#ff0000"));
        // Sibling shades untouched
        assert_eq!(get_path(&effective, "colors.primary.400"), Some("#60a5fa"));
        // Unrelated groups untouched
        assert_eq!(get_path(&effective, "typography.fontWeight.bold"), Some("700"));
    }

    #[test]
    fn test_idempotent() {
        let base = default_tokens();
        let overlay = tree_from_json(&json!({
            "colors": { "primary": { "500": "#ff0000" } },
            "spacing": { "4": "1.125rem" }
        }));

        let once = merge(&base, &overlay);
        let twice = merge(&once, &overlay);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_leaf_replaces_group_wholesale() {
        let base = tree_from_json(&json!({
            "shadows": { "sm": "a", "md": "b" }
        }));
        let overlay = tree_from_json(&json!({ "shadows": "none" }));

        let effective = merge(&base, &overlay);
        assert_eq!(effective.get("shadows").and_then(|n| n.as_leaf()), Some("none"));
    }

    #[test]
    fn test_group_replaces_leaf_wholesale() {
        let base = tree_from_json(&json!({ "radius": "4px" }));
        let overlay = tree_from_json(&json!({ "radius": { "sm": "2px" } }));

        let effective = merge(&base, &overlay);
        assert_eq!(get_path(&effective, "radius.sm"), Some("2px"));
    }

    #[test]
    fn test_overlay_only_keys_appended() {
        let base = tree_from_json(&json!({ "a": "1" }));
        let overlay = tree_from_json(&json!({ "b": "2" }));

        let effective = merge(&base, &overlay);
        let keys: Vec<&str> = effective.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_null_leaves_keep_base_value() {
        // Nulls are dropped at conversion, so the base survives.
        let base = default_tokens();
        let overlay = tree_from_json(&json!({
            "colors": { "primary": { "500": null, "600": "#123456" } }
        }));

        let effective = merge(&base, &overlay);
        assert_eq!(get_path(&effective, "colors.primary.500"), Some("#3b82f6"));
        assert_eq!(get_path(&effective, "colors.primary.600"), Some("#123456"));
    }
}
