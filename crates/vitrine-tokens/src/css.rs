//! Stylesheet Generation
//!
//! Renders a token tree as a `:root` rule with one custom property per
//! projected pair, section by section.

use crate::node::TokenTree;
use crate::project::project_sections;
use std::fmt::Write;

/// Render the full `:root { ... }` stylesheet for a token tree
pub fn to_css(tree: &TokenTree) -> String {
    let mut css = String::new();

    css.push_str("/* Generated design tokens */\n");
    css.push_str(":root {\n");

    for (label, props) in project_sections(tree) {
        if props.is_empty() {
            continue;
        }
        let _ = writeln!(css, "  /* === {label} === */");
        for prop in props {
            let _ = writeln!(css, "  --{}: {};", prop.name, prop.value);
        }
    }

    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_tokens;

    #[test]
    fn test_stylesheet_shape() {
        let css = to_css(&default_tokens());

        assert!(css.starts_with("/* Generated design tokens */\n:root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  /* === COLORS === */\n"));
        assert!(css.contains("  /* === COMPONENTS === */\n"));
        assert!(css.contains("  --color-primary-500: #3b82f6;\n"));
        assert!(css.contains("  --font-weight-bold: 700;\n"));
    }

    #[test]
    fn test_empty_tree_has_no_sections() {
        let css = to_css(&TokenTree::new());
        assert!(!css.contains("==="));
        assert!(css.contains(":root {"));
    }
}
