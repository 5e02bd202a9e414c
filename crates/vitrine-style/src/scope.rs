//! Style Scope
//!
//! Target surface for projected custom properties. Property names arrive
//! without the `--` sigil; the scope adds it. An absent property means the
//! stylesheet's own fallback applies, since tokens are additive overrides.

use indexmap::IndexMap;
use vitrine_tokens::CssProperty;

/// A live style scope (the document root, headless buffer, ...)
pub trait StyleScope {
    /// Set one custom property
    fn set_property(&mut self, name: &str, value: &str);

    /// Remove one custom property
    fn remove_property(&mut self, name: &str);

    /// Read a custom property back
    fn get_property(&self, name: &str) -> Option<&str>;

    /// Commit a whole projection as one batch. Implementations that talk to
    /// a real document should apply the batch in a single visual update.
    fn commit(&mut self, props: &[CssProperty]) {
        for prop in props {
            self.set_property(&prop.name, &prop.value);
        }
    }
}

/// In-memory style scope for headless runs and tests
#[derive(Debug, Default)]
pub struct MemoryScope {
    properties: IndexMap<String, String>,
    commits: usize,
}

impl MemoryScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of custom properties currently set
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of batched commits performed
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    fn key(name: &str) -> String {
        format!("--{name}")
    }
}

impl StyleScope for MemoryScope {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(Self::key(name), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.shift_remove(&Self::key(name));
    }

    fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(&Self::key(name)).map(String::as_str)
    }

    fn commit(&mut self, props: &[CssProperty]) {
        for prop in props {
            self.set_property(&prop.name, &prop.value);
        }
        self.commits += 1;
    }
}
