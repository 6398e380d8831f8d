use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::category::Category;

/// Resolved blocks grouped by the user-agent category they are scoped to.
///
/// The fixed categories are always present. Each block is a `+`-joined
/// directive string whose choice groups have already been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBuckets {
    buckets: BTreeMap<Category, BTreeSet<String>>,
}

impl Default for BlockBuckets {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuckets {
    /// Create a mapping with every fixed category present and empty.
    #[must_use]
    pub fn new() -> Self {
        let buckets = Category::FIXED
            .into_iter()
            .map(|category| (category, BTreeSet::new()))
            .collect();
        Self { buckets }
    }

    /// Record a resolved block, creating the category bucket on first use.
    pub fn insert(&mut self, category: Category, block: impl Into<String>) {
        self.buckets.entry(category).or_default().insert(block.into());
    }

    /// Blocks of one category, or `None` for a custom category never seen.
    #[must_use]
    pub fn get(&self, category: &Category) -> Option<&BTreeSet<String>> {
        self.buckets.get(category)
    }

    /// Whether a category has no blocks (or does not exist).
    #[must_use]
    pub fn is_empty_for(&self, category: &Category) -> bool {
        self.get(category).map_or(true, BTreeSet::is_empty)
    }

    /// Every category present, fixed ones included.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.buckets.keys()
    }

    /// Total number of blocks across all categories.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }
}

impl fmt::Display for BlockBuckets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (category, blocks) in &self.buckets {
            if blocks.is_empty() {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            let joined: Vec<&str> = blocks.iter().map(String::as_str).collect();
            write!(f, "{category}: [{}]", joined.join(" | "))?;
        }
        Ok(())
    }
}
