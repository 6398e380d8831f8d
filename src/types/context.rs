use std::collections::BTreeMap;

use super::Value;

/// Template context: variable names mapped to [`Value`]s.
///
/// Handed to the rendering layer alongside the response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    data: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Set a variable (mutable reference version).
    pub fn insert(&mut self, name: &str, value: Value) {
        self.data.insert(name.to_owned(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Fold another context into this one. Keys in `other` win.
    pub fn merge(&mut self, other: Context) {
        self.data.extend(other.data);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
