use crate::parse::{self, MalformedInputError, ParsedBlock, Segment};
use crate::random::{choose, RandomSource};

/// Resolve the choice groups of one block into a flat `+`-joined directive string.
///
/// Plain tokens are kept as-is. Each choice group contributes exactly one of
/// its alternatives, split on `+`; an empty group contributes nothing. Empty
/// tokens are dropped and each directive appears once, in first-seen order.
pub fn resolve_block(block: &ParsedBlock, source: &dyn RandomSource) -> String {
    let mut directives: Vec<&str> = Vec::new();
    let mut picks: Vec<&str> = Vec::new();

    for segment in &block.segments {
        match segment {
            Segment::Plain(tokens) => directives.extend(tokens.iter().map(String::as_str)),
            Segment::Choice(alternatives) => {
                if let Some(pick) = choose(source, alternatives) {
                    picks.push(pick);
                }
            }
        }
    }
    directives.extend(picks.into_iter().flat_map(|pick| pick.split('+')));

    let mut unique: Vec<&str> = Vec::with_capacity(directives.len());
    for directive in directives {
        if !directive.is_empty() && !unique.contains(&directive) {
            unique.push(directive);
        }
    }
    unique.join("+")
}

/// Resolve a normalized block body given as text, e.g. `a+(b,c)`.
///
/// # Errors
///
/// Returns [`MalformedInputError`] if the content cannot be tokenized.
pub fn resolve_str(
    content: &str,
    source: &dyn RandomSource,
) -> Result<String, MalformedInputError> {
    let block = ParsedBlock {
        category: None,
        segments: parse::parse_body(content)?,
    };
    Ok(resolve_block(&block, source))
}
