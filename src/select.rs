use std::collections::BTreeSet;

use tracing::debug;

use crate::random::{choose, RandomSource};
use crate::user_agent::UserAgent;
use crate::{BlockBuckets, Category};

// Categories gated by a user-agent fact, in the order they are checked.
const FACT_CATEGORIES: [Category; 7] = [
    Category::Bot,
    Category::Googlebot,
    Category::Ie,
    Category::Ff,
    Category::Mobile,
    Category::Desktop,
    Category::Tablet,
];

/// Outcome of picking one block for a user agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    matched: Vec<Category>,
    pool: Vec<String>,
    chosen: Option<String>,
}

impl Selection {
    /// Fact-gated categories that matched and had blocks. Empty means the
    /// `none` bucket was used as a fallback.
    #[must_use]
    pub fn matched(&self) -> &[Category] {
        &self.matched
    }

    /// Every block that was eligible, in bucket order.
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// The block that was picked, if the pool was non-empty.
    #[must_use]
    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    /// The chosen block split into directive tokens.
    #[must_use]
    pub fn directives(&self) -> Vec<String> {
        self.chosen
            .as_deref()
            .map(split_block)
            .unwrap_or_default()
    }
}

fn split_block(block: &str) -> Vec<String> {
    block
        .split('+')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Pick the block that governs a response for this user agent.
///
/// The `all` bucket is always eligible. Each fact-gated bucket joins the pool
/// when its fact holds and it has blocks; if none did, the `none` bucket
/// joins instead. One block is then drawn uniformly from the pool.
pub fn select(
    buckets: &BlockBuckets,
    user_agent: &UserAgent,
    source: &dyn RandomSource,
) -> Selection {
    let mut pool: BTreeSet<&str> = BTreeSet::new();
    let mut matched = Vec::new();

    extend_pool(&mut pool, buckets, &Category::All);

    for category in FACT_CATEGORIES {
        if user_agent.matches(&category) && !buckets.is_empty_for(&category) {
            extend_pool(&mut pool, buckets, &category);
            matched.push(category);
        }
    }

    if matched.is_empty() {
        extend_pool(&mut pool, buckets, &Category::None);
    }

    let pool: Vec<String> = pool.into_iter().map(str::to_owned).collect();
    let chosen = choose(source, &pool).cloned();

    debug!(
        user_agent = %user_agent,
        matched = ?matched,
        pool = pool.len(),
        chosen = ?chosen,
        "selected block"
    );

    Selection {
        matched,
        pool,
        chosen,
    }
}

fn extend_pool<'a>(pool: &mut BTreeSet<&'a str>, buckets: &'a BlockBuckets, category: &Category) {
    if let Some(blocks) = buckets.get(category) {
        pool.extend(blocks.iter().map(String::as_str));
    }
}

/// Shorthand for [`select`] returning only the directive tokens.
pub fn select_directives(
    buckets: &BlockBuckets,
    user_agent: &UserAgent,
    source: &dyn RandomSource,
) -> Vec<String> {
    select(buckets, user_agent, source).directives()
}
