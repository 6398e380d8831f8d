use crate::{Directive, Effect};

const H1_TABLE: [(Directive, &str); 2] = [
    (Directive::H1Off, "off"),
    (Directive::H1Multiple, "multiple"),
];

/// Set the `h1` context variable. Empty means a single heading.
pub fn h1<S: AsRef<str>>(directives: &[S]) -> Effect {
    let mode = H1_TABLE
        .iter()
        .find(|(directive, _)| directive.is_in(directives))
        .map_or("", |(_, mode)| *mode);
    Effect::new().with_context("h1", mode)
}
