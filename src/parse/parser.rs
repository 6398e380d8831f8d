/// One piece of a block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any choice group, split on `+`. May contain empty tokens.
    Plain(Vec<String>),
    /// Alternatives of one choice group, split on `,`. Empty for `()`.
    Choice(Vec<String>),
}

impl Segment {
    pub(crate) fn plain(text: &str) -> Self {
        Segment::Plain(text.split('+').map(str::to_owned).collect())
    }

    pub(crate) fn choice(group: &str) -> Self {
        if group.is_empty() {
            return Segment::Choice(Vec::new());
        }
        Segment::Choice(group.split(',').map(str::to_owned).collect())
    }
}

/// A top-level block with its optional category prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    pub category: Option<String>,
    pub segments: Vec<Segment>,
}

/// The result of parsing a directive path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    pub normalized: String,
    pub blocks: Vec<ParsedBlock>,
}
