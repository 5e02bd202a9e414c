//! CSS Projection Engine
//!
//! Walks an effective token tree and emits flat (property, value) pairs
//! following the storefront's custom-property naming contract. Property
//! names are emitted without the `--` sigil; the style scope adds it.

use crate::node::{TokenGroup, TokenNode, TokenTree};
use heck::ToKebabCase;

/// One projected custom property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssProperty {
    pub name: String,
    pub value: String,
}

impl CssProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Color scale groups, emitted as `color-<group>-<shade>`
const COLOR_SCALES: [&str; 7] = [
    "primary", "secondary", "neutral", "success", "warning", "error", "info",
];

/// Semantic color groups, emitted as `color-<group>-<key>`
const COLOR_SEMANTICS: [&str; 3] = ["background", "text", "border"];

/// Typography sub-groups, in emission order
const TYPOGRAPHY_GROUPS: [&str; 5] = [
    "fontFamily", "fontSize", "fontWeight", "lineHeight", "letterSpacing",
];

/// Project a token tree into a flat, deterministically-ordered property list
pub fn project(tree: &TokenTree) -> Vec<CssProperty> {
    project_sections(tree)
        .into_iter()
        .flat_map(|(_, props)| props)
        .collect()
}

/// Project a token tree grouped by section, for stylesheet generation.
///
/// Traversal order is fixed: colors, typography, spacing, sizing, border
/// radius, shadows, z-index, transitions, components. Breakpoints live in
/// the tree but are never projected.
pub fn project_sections(tree: &TokenTree) -> Vec<(&'static str, Vec<CssProperty>)> {
    let mut sections = Vec::new();

    if let Some(colors) = child_group(tree, "colors") {
        sections.push(("COLORS", project_colors(colors)));
    }
    if let Some(typography) = child_group(tree, "typography") {
        sections.push(("TYPOGRAPHY", project_typography(typography)));
    }
    if let Some(spacing) = child_group(tree, "spacing") {
        sections.push(("SPACING", project_flat(spacing, "space")));
    }
    if let Some(sizing) = child_group(tree, "sizing") {
        sections.push(("SIZING", project_flat(sizing, "size")));
    }
    if let Some(radius) = child_group(tree, "borderRadius") {
        sections.push(("BORDER RADIUS", project_flat(radius, "border-radius")));
    }
    if let Some(shadows) = child_group(tree, "shadows") {
        sections.push(("SHADOWS", project_flat(shadows, "shadow")));
    }
    if let Some(z_index) = child_group(tree, "zIndex") {
        sections.push(("Z-INDEX", project_flat(z_index, "z-index")));
    }
    if let Some(transitions) = child_group(tree, "transitions") {
        sections.push(("TRANSITIONS", project_transitions(transitions)));
    }
    if let Some(components) = child_group(tree, "components") {
        sections.push(("COMPONENTS", project_components(components)));
    }

    sections
}

fn child_group<'a>(tree: &'a TokenTree, key: &str) -> Option<&'a TokenGroup> {
    tree.get(key).and_then(TokenNode::as_group)
}

/// Emit `<prefix>-<key>` for every leaf in a flat group
fn project_flat(group: &TokenGroup, prefix: &str) -> Vec<CssProperty> {
    let mut out = Vec::new();
    push_flat(group, prefix, &mut out);
    out
}

fn push_flat(group: &TokenGroup, prefix: &str, out: &mut Vec<CssProperty>) {
    for (key, node) in group {
        if let Some(value) = node.as_leaf() {
            out.push(CssProperty::new(format!("{prefix}-{key}"), value));
        }
    }
}

fn project_colors(colors: &TokenGroup) -> Vec<CssProperty> {
    let mut out = Vec::new();

    for scale in COLOR_SCALES {
        if let Some(group) = colors.get(scale).and_then(TokenNode::as_group) {
            push_flat(group, &format!("color-{scale}"), &mut out);
        }
    }

    for semantic in COLOR_SEMANTICS {
        if let Some(group) = colors.get(semantic).and_then(TokenNode::as_group) {
            for (key, node) in group {
                if let Some(value) = node.as_leaf() {
                    let css_key = if key == "linkHover" { "link-hover" } else { key };
                    out.push(CssProperty::new(format!("color-{semantic}-{css_key}"), value));
                }
            }
        }
    }

    out
}

fn project_typography(typography: &TokenGroup) -> Vec<CssProperty> {
    let mut out = Vec::new();

    for group_name in TYPOGRAPHY_GROUPS {
        if let Some(group) = typography.get(group_name).and_then(TokenNode::as_group) {
            // fontFamily -> font-family etc.
            push_flat(group, &group_name.to_kebab_case(), &mut out);
        }
    }

    out
}

fn project_transitions(transitions: &TokenGroup) -> Vec<CssProperty> {
    let mut out = Vec::new();

    if let Some(duration) = transitions.get("duration").and_then(TokenNode::as_group) {
        push_flat(duration, "transition-duration", &mut out);
    }
    if let Some(timing) = transitions.get("timing").and_then(TokenNode::as_group) {
        for (key, node) in timing {
            if let Some(value) = node.as_leaf() {
                let css_key = if key == "inOut" { "in-out" } else { key };
                out.push(CssProperty::new(format!("transition-timing-{css_key}"), value));
            }
        }
    }

    out
}

fn project_components(components: &TokenGroup) -> Vec<CssProperty> {
    let mut out = Vec::new();

    for (component, node) in components {
        let Some(tokens) = node.as_group() else { continue };
        for (token_key, token_node) in tokens {
            match token_node {
                // Sub-scale: <component>-<tokenKey>-<subKey>, token key kept raw
                TokenNode::Group(sub) => {
                    for (sub_key, sub_node) in sub {
                        if let Some(value) = sub_node.as_leaf() {
                            out.push(CssProperty::new(
                                format!("{component}-{token_key}-{sub_key}"),
                                value,
                            ));
                        }
                    }
                }
                TokenNode::Leaf(value) => {
                    let css_key = match token_key.as_str() {
                        "paddingX" => "padding-x",
                        "borderWidth" => "border-width",
                        other => other,
                    };
                    out.push(CssProperty::new(format!("{component}-{css_key}"), value));
                }
            }
        }
    }

    out
}
