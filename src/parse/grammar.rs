use winnow::combinator::{alt, delimited, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{rest, take_till, take_while};

use super::parser::Segment;

// -- Top-level blocks -------------------------------------------------------

fn block<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('[', take_till(0.., ']'), ']').parse_next(input)
}

/// Every `[...]` block in a normalized path. Text between blocks is ignored.
pub fn parse_blocks<'i>(input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    let blocks: Vec<&str> =
        repeat(0.., preceded(take_till(0.., '['), block)).parse_next(input)?;
    rest.parse_next(input)?;
    Ok(blocks)
}

// -- Category prefix --------------------------------------------------------

fn is_category_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '
}

fn category_prefix<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    terminated(take_while(1.., is_category_char), ':').parse_next(input)
}

/// Split a block into its optional `name:` prefix and the remaining body.
pub fn parse_block_header<'i>(input: &mut &'i str) -> ModalResult<(Option<&'i str>, &'i str)> {
    (opt(category_prefix), rest).parse_next(input)
}

// -- Block body -------------------------------------------------------------

fn choice_group<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('(', take_till(0.., ')'), ')').parse_next(input)
}

// A '(' with no matching ')' is ordinary text.
fn plain_run<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((take_till(1.., '('), "(")).parse_next(input)
}

enum Piece<'i> {
    Plain(&'i str),
    Choice(&'i str),
}

/// Split a block body into plain `+`-joined runs and `(a,b,...)` choice groups.
pub fn parse_block_body<'i>(input: &mut &'i str) -> ModalResult<Vec<Segment>> {
    let pieces: Vec<Piece<'i>> = repeat(
        0..,
        alt((choice_group.map(Piece::Choice), plain_run.map(Piece::Plain))),
    )
    .parse_next(input)?;

    let mut segments = Vec::new();
    let mut plain = String::new();
    for piece in pieces {
        match piece {
            Piece::Plain(text) => plain.push_str(text),
            Piece::Choice(group) => {
                segments.push(Segment::plain(&plain));
                plain.clear();
                segments.push(Segment::choice(group));
            }
        }
    }
    segments.push(Segment::plain(&plain));
    Ok(segments)
}
