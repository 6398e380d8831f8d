use tracing::debug;

use crate::parse::{self, MalformedInputError, ParsedPath};
use crate::random::RandomSource;
use crate::resolve::resolve_block;
use crate::{BlockBuckets, Category};

/// Parse a directive path segment and group its resolved blocks by category.
///
/// Choice groups are resolved here, once, so the buckets stay stable for the
/// rest of the request.
///
/// # Errors
///
/// Returns [`MalformedInputError`] if the bracket structure is invalid.
pub fn collate(
    segment: &str,
    source: &dyn RandomSource,
) -> Result<BlockBuckets, MalformedInputError> {
    let parsed = parse::parse(segment)?;
    Ok(collate_parsed(&parsed, source))
}

/// Group the blocks of an already parsed path by category.
pub fn collate_parsed(parsed: &ParsedPath, source: &dyn RandomSource) -> BlockBuckets {
    let mut buckets = BlockBuckets::new();

    for block in &parsed.blocks {
        let category = block
            .category
            .as_deref()
            .map_or(Category::None, Category::from_name);
        buckets.insert(category, resolve_block(block, source));
    }

    debug!(
        normalized = %parsed.normalized,
        blocks = parsed.blocks.len(),
        buckets = %buckets,
        "collated blocks"
    );
    buckets
}
