use super::random_url::random_url;
use crate::random::RandomSource;
use crate::url::RequestTarget;
use crate::{Directive, Effect};

#[derive(Debug, Clone, Copy)]
enum Target {
    NextBlock,
    Random,
    Current,
    Home,
}

impl Target {
    fn context_key(self) -> &'static str {
        match self {
            Target::NextBlock => "canonical_next_block",
            Target::Random => "canonical_random",
            Target::Current => "canonical_self",
            Target::Home => "canonical_home",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Placement {
    Both,
    Header,
    Html,
}

impl Placement {
    fn header(self) -> bool {
        matches!(self, Placement::Both | Placement::Header)
    }

    fn html(self) -> bool {
        matches!(self, Placement::Both | Placement::Html)
    }
}

// Applied in order; a later row overwrites the `Link` header or context key
// an earlier one set.
const CANONICAL_TABLE: [(Directive, Target, Placement); 12] = [
    (Directive::CanonicalNextBlock, Target::NextBlock, Placement::Both),
    (Directive::CanonicalRandom, Target::Random, Placement::Both),
    (Directive::CanonicalSelf, Target::Current, Placement::Both),
    (Directive::CanonicalHome, Target::Home, Placement::Both),
    (Directive::HeaderCanonicalNextBlock, Target::NextBlock, Placement::Header),
    (Directive::HeaderCanonicalRandom, Target::Random, Placement::Header),
    (Directive::HeaderCanonicalSelf, Target::Current, Placement::Header),
    (Directive::HeaderCanonicalHome, Target::Home, Placement::Header),
    (Directive::HtmlCanonicalNextBlock, Target::NextBlock, Placement::Html),
    (Directive::HtmlCanonicalRandom, Target::Random, Placement::Html),
    (Directive::HtmlCanonicalSelf, Target::Current, Placement::Html),
    (Directive::HtmlCanonicalHome, Target::Home, Placement::Html),
];

/// Compose canonical link context variables and the `Link` header.
///
/// `canonical_*` sets both, `header_canonical_*` only the header and
/// `html_canonical_*` only the context variable. Each `*_random` directive
/// draws its own URL from `fragments`.
pub fn canonical<S: AsRef<str>>(
    directives: &[S],
    target: &RequestTarget,
    fragments: &[String],
    source: &dyn RandomSource,
) -> Effect {
    let mut effect = Effect::new();

    for (directive, kind, placement) in CANONICAL_TABLE {
        if !directive.is_in(directives) {
            continue;
        }
        let url = match kind {
            Target::NextBlock => target.previous().to_owned(),
            Target::Random => random_url(target.base(), fragments, source),
            Target::Current => target.current().to_owned(),
            Target::Home => target.base().to_owned(),
        };
        if placement.header() {
            effect = effect.with_header("Link", format!("<{url}>; rel=\"canonical\""));
        }
        if placement.html() {
            effect = effect.with_context(kind.context_key(), url);
        }
    }

    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedIndex;
    use crate::{EngineConfig, Value};

    fn target() -> RequestTarget {
        RequestTarget::new("http", "crawlbin.com", "/a/[canonical_self]/")
    }

    fn run(directives: &[&str]) -> Effect {
        let fragments = EngineConfig::default().random_url_fragments;
        canonical(directives, &target(), &fragments, &FixedIndex(2))
    }

    #[test]
    fn no_canonical() {
        let effect = run(&["h1_off"]);
        assert!(effect.headers().is_empty());
        assert!(effect.context().is_empty());
    }

    #[test]
    fn canonical_sets_both() {
        let effect = run(&["canonical_self"]);
        assert_eq!(
            effect.headers().get("Link"),
            Some("<http://crawlbin.com/a/[canonical_self]/>; rel=\"canonical\"")
        );
        assert_eq!(
            effect.context().get("canonical_self"),
            Some(&Value::from("http://crawlbin.com/a/[canonical_self]/"))
        );
    }

    #[test]
    fn header_only() {
        let effect = run(&["header_canonical_home"]);
        assert_eq!(
            effect.headers().get("Link"),
            Some("<http://crawlbin.com>; rel=\"canonical\"")
        );
        assert!(effect.context().is_empty());
    }

    #[test]
    fn html_only() {
        let effect = run(&["html_canonical_next_block"]);
        assert!(effect.headers().is_empty());
        assert_eq!(
            effect.context().get("canonical_next_block"),
            Some(&Value::from("http://crawlbin.com/a/"))
        );
    }

    #[test]
    fn random_uses_fragment() {
        let effect = run(&["canonical_random"]);
        assert_eq!(
            effect.context().get("canonical_random"),
            Some(&Value::from("http://crawlbin.com/meta_noindex/"))
        );
    }

    #[test]
    fn later_header_family_wins() {
        let effect = run(&["header_canonical_home", "canonical_self"]);
        assert_eq!(
            effect.headers().get("Link"),
            Some("<http://crawlbin.com>; rel=\"canonical\"")
        );
        assert!(effect.context().get("canonical_self").is_some());
    }

    #[test]
    fn html_overwrites_same_key() {
        let effect = run(&["canonical_home", "html_canonical_home"]);
        assert_eq!(
            effect.context().get("canonical_home"),
            Some(&Value::from("http://crawlbin.com"))
        );
        assert_eq!(effect.context().len(), 1);
    }
}
