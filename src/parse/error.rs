use thiserror::Error;

/// Errors produced when a directive path segment has invalid bracket structure.
///
/// This is the only way resolution can fail. Callers are expected to surface
/// it as a client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInputError {
    #[error("malformed input: unexpected closing bracket at position {position}")]
    UnexpectedClosingBracket { position: usize },

    #[error("malformed input: too deep nesting at position {position}")]
    TooDeepNesting { position: usize },

    #[error("malformed input: unclosed bracket")]
    UnclosedBracket,

    #[error("malformed input: {message}")]
    Unparsable { message: String },
}
