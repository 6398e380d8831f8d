use tracing::debug;

use super::error::MalformedInputError;

const MAX_DEPTH: usize = 2;

/// Validate bracket structure and rewrite nested brackets to parentheses.
///
/// A segment that does not both start with `[` and end with `]` is wrapped in
/// one outer pair first. Top-level brackets are kept as `[` `]`; the single
/// permitted inner level becomes `(` `)`. Positions in errors are byte offsets
/// into the caller's segment.
///
/// # Errors
///
/// Returns [`MalformedInputError`] for a closing bracket without an opener,
/// nesting deeper than two levels, or an opener that is never closed.
pub fn normalize(segment: &str) -> Result<String, MalformedInputError> {
    let wrapped = segment.len() >= 2 && segment.starts_with('[') && segment.ends_with(']');
    let (input, offset) = if wrapped {
        (segment.to_owned(), 0)
    } else {
        (format!("[{segment}]"), 1)
    };

    let mut out = String::with_capacity(input.len());
    let mut depth = 0usize;

    for (pos, ch) in input.char_indices() {
        let position = pos.saturating_sub(offset).min(segment.len());
        match ch {
            '[' => {
                if depth == MAX_DEPTH {
                    debug!(segment, position, "bracket nesting too deep");
                    return Err(MalformedInputError::TooDeepNesting { position });
                }
                out.push(if depth == 0 { '[' } else { '(' });
                depth += 1;
            }
            ']' => {
                match depth {
                    0 => {
                        debug!(segment, position, "unexpected closing bracket");
                        return Err(MalformedInputError::UnexpectedClosingBracket { position });
                    }
                    1 => out.push(']'),
                    _ => out.push(')'),
                }
                depth -= 1;
            }
            other => out.push(other),
        }
    }

    if depth != 0 {
        debug!(segment, depth, "unclosed bracket");
        return Err(MalformedInputError::UnclosedBracket);
    }

    Ok(out)
}
