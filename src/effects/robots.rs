use crate::{Directive, Effect};

// Meta tokens, in the order they appear in `meta_follow_index_string`.
const META_TABLE: [(Directive, &str); 4] = [
    (Directive::MetaFollow, "follow"),
    (Directive::MetaNofollow, "nofollow"),
    (Directive::MetaIndex, "index"),
    (Directive::MetaNoindex, "noindex"),
];

// Header tokens, in the order they appear in `X-Robots-Tag`. Not the meta order.
const HEADER_TABLE: [(Directive, &str); 4] = [
    (Directive::HeaderNoindex, "noindex"),
    (Directive::HeaderIndex, "index"),
    (Directive::HeaderNofollow, "nofollow"),
    (Directive::HeaderFollow, "follow"),
];

/// Compose robots meta context and the `X-Robots-Tag` header.
///
/// Each `meta_*` directive sets a boolean context flag named after itself and
/// contributes to `meta_follow_index_string` (joined with `", "`). The
/// `header_*` directives are joined with `","` into one header, set only when
/// at least one is present.
pub fn index_follow<S: AsRef<str>>(directives: &[S]) -> Effect {
    let mut effect = Effect::new();
    let mut meta = Vec::new();

    for (directive, token) in META_TABLE {
        let present = directive.is_in(directives);
        effect = effect.with_context(directive.as_str(), present);
        if present {
            meta.push(token);
        }
    }
    effect = effect.with_context("meta_follow_index_string", meta.join(", "));

    let header: Vec<&str> = HEADER_TABLE
        .iter()
        .filter(|(directive, _)| directive.is_in(directives))
        .map(|(_, token)| *token)
        .collect();
    if !header.is_empty() {
        effect = effect.with_header("X-Robots-Tag", header.join(","));
    }

    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn nothing_set() {
        let effect = index_follow::<&str>(&[]);
        assert_eq!(
            effect.context().get("meta_follow_index_string"),
            Some(&Value::from(""))
        );
        for flag in ["meta_follow", "meta_nofollow", "meta_index", "meta_noindex"] {
            assert_eq!(effect.context().get(flag), Some(&Value::Bool(false)));
        }
        assert!(effect.headers().is_empty());
    }

    #[test]
    fn meta_string_uses_fixed_order() {
        let effect = index_follow(&["meta_index", "meta_follow"]);
        assert_eq!(
            effect.context().get("meta_follow_index_string"),
            Some(&Value::from("follow, index"))
        );
        assert_eq!(effect.context().get("meta_follow"), Some(&Value::Bool(true)));
        assert_eq!(effect.context().get("meta_noindex"), Some(&Value::Bool(false)));
    }

    #[test]
    fn all_meta() {
        let effect = index_follow(&["meta_noindex", "meta_index", "meta_nofollow", "meta_follow"]);
        assert_eq!(
            effect.context().get("meta_follow_index_string"),
            Some(&Value::from("follow, nofollow, index, noindex"))
        );
    }

    #[test]
    fn header_uses_its_own_order() {
        let effect = index_follow(&["header_follow", "header_noindex"]);
        assert_eq!(effect.headers().get("X-Robots-Tag"), Some("noindex,follow"));
    }

    #[test]
    fn meta_does_not_touch_header() {
        let effect = index_follow(&["meta_noindex"]);
        assert!(effect.headers().get("X-Robots-Tag").is_none());
    }
}
