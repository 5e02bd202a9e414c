//! Token Tree Model
//!
//! Tagged tree of design values: a node is either a CSS literal leaf or a
//! named group of further nodes.

use indexmap::IndexMap;
use serde_json::Value;

/// A named group of token nodes. Insertion order is preserved so that
/// projection output stays deterministic.
pub type TokenGroup = IndexMap<String, TokenNode>;

/// A full token tree. The top level is always a group.
pub type TokenTree = TokenGroup;

/// One node in a token tree
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    /// A CSS-legal literal (color, length, keyword, cubic-bezier, ...)
    Leaf(String),
    /// A nested group (scale, semantic group or component group)
    Group(TokenGroup),
}

impl TokenNode {
    /// Build a leaf node from a literal
    pub fn leaf(value: &str) -> Self {
        TokenNode::Leaf(value.to_string())
    }

    /// Get the literal value if this is a leaf
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TokenNode::Leaf(v) => Some(v),
            TokenNode::Group(_) => None,
        }
    }

    /// Get the entries if this is a group
    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            TokenNode::Leaf(_) => None,
            TokenNode::Group(g) => Some(g),
        }
    }

    /// Check whether this node is a group
    pub fn is_group(&self) -> bool {
        matches!(self, TokenNode::Group(_))
    }

    /// Look up a direct child by key
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.as_group().and_then(|g| g.get(key))
    }

    /// Convert a JSON value into a token node.
    ///
    /// Strings stay as-is, numbers and booleans render to their display
    /// form, arrays collapse to a comma-joined CSS list. `null` yields
    /// `None`: a null entry neither overrides a default nor clears it.
    pub fn from_json(value: &Value) -> Option<TokenNode> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(TokenNode::Leaf(s.clone())),
            Value::Number(n) => Some(TokenNode::Leaf(n.to_string())),
            Value::Bool(b) => Some(TokenNode::Leaf(b.to_string())),
            Value::Array(items) => {
                let joined: Vec<String> = items
                    .iter()
                    .filter_map(|item| match TokenNode::from_json(item) {
                        Some(TokenNode::Leaf(v)) => Some(v),
                        _ => None,
                    })
                    .collect();
                Some(TokenNode::Leaf(joined.join(", ")))
            }
            Value::Object(entries) => {
                let mut group = TokenGroup::new();
                for (key, entry) in entries {
                    if let Some(node) = TokenNode::from_json(entry) {
                        group.insert(key.clone(), node);
                    }
                }
                Some(TokenNode::Group(group))
            }
        }
    }
}

/// Convert a JSON object into a token tree. Non-object input yields an
/// empty tree (a malformed override degrades to "no override").
pub fn tree_from_json(value: &Value) -> TokenTree {
    match TokenNode::from_json(value) {
        Some(TokenNode::Group(group)) => group,
        _ => TokenTree::new(),
    }
}

/// Look up a leaf by dotted path, e.g. `colors.primary.500`
pub fn get_path<'a>(tree: &'a TokenTree, path: &str) -> Option<&'a str> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut node = tree.get(first)?;
    for segment in segments {
        node = node.get(segment)?;
    }
    node.as_leaf()
}
