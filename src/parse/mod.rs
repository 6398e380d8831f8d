mod error;
mod grammar;
mod normalize;
mod parser;

pub use error::MalformedInputError;
pub use normalize::normalize;
pub use parser::{ParsedBlock, ParsedPath, Segment};

use winnow::Parser;

/// Normalize a directive path segment and split it into blocks.
///
/// # Errors
///
/// Returns [`MalformedInputError`] if the bracket structure is invalid.
pub fn parse(segment: &str) -> Result<ParsedPath, MalformedInputError> {
    let normalized = normalize(segment)?;

    let raw_blocks = grammar::parse_blocks
        .parse(normalized.as_str())
        .map_err(|e| MalformedInputError::Unparsable {
            message: e.to_string(),
        })?;

    let blocks = raw_blocks
        .into_iter()
        .map(parse_block)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedPath { normalized, blocks })
}

/// Parse the content of one normalized top-level block, without its `[]`.
///
/// # Errors
///
/// Returns [`MalformedInputError`] if the content cannot be tokenized.
pub fn parse_block(content: &str) -> Result<ParsedBlock, MalformedInputError> {
    let (category, body) = grammar::parse_block_header
        .parse(content)
        .map_err(|e| MalformedInputError::Unparsable {
            message: e.to_string(),
        })?;

    Ok(ParsedBlock {
        category: category.map(str::to_owned),
        segments: parse_body(body)?,
    })
}

/// Split a block body (prefix already removed) into plain runs and choice groups.
///
/// # Errors
///
/// Returns [`MalformedInputError`] if the content cannot be tokenized.
pub fn parse_body(body: &str) -> Result<Vec<Segment>, MalformedInputError> {
    grammar::parse_block_body
        .parse(body.trim())
        .map_err(|e| MalformedInputError::Unparsable {
            message: e.to_string(),
        })
}
