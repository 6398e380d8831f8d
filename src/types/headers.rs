use std::collections::BTreeMap;
use std::fmt;

/// Response header names mapped to values. One value per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    data: BTreeMap<String, String>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any previous value.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.data.insert(name.to_owned(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    /// Fold another header set into this one. Names in `other` win.
    pub fn merge(&mut self, other: Headers) {
        self.data.extend(other.data);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
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

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.data {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
