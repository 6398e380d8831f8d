use crate::{Directive, Effect};

const VARY_TABLE: [(&[Directive], &str); 4] = [
    (&[Directive::VaryAcceptEncoding], "Accept-Encoding"),
    (&[Directive::VaryUserAgent], "User-Agent"),
    (&[Directive::VaryCookie], "Cookie"),
    (&[Directive::VaryReferer, Directive::VaryReferrer], "Referer"),
];

/// Join the `vary_*` directives into one `Vary` header, in table order.
pub fn vary<S: AsRef<str>>(directives: &[S]) -> Effect {
    let values: Vec<&str> = VARY_TABLE
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|d| d.is_in(directives)))
        .map(|(_, header)| *header)
        .collect();

    if values.is_empty() {
        return Effect::new();
    }
    Effect::new().with_header("Vary", values.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_vary() {
        assert!(vary(&["h1_off"]).headers().is_empty());
    }

    #[test]
    fn fixed_order() {
        let effect = vary(&["vary_cookie", "vary_user_agent"]);
        assert_eq!(effect.headers().get("Vary"), Some("User-Agent,Cookie"));
    }

    #[test]
    fn referrer_spellings_collapse() {
        let effect = vary(&["vary_referrer", "vary_referer"]);
        assert_eq!(effect.headers().get("Vary"), Some("Referer"));
        let effect = vary(&["vary_referrer"]);
        assert_eq!(effect.headers().get("Vary"), Some("Referer"));
    }

    #[test]
    fn all_four() {
        let effect = vary(&[
            "vary_referer",
            "vary_cookie",
            "vary_user_agent",
            "vary_accept_encoding",
        ]);
        assert_eq!(
            effect.headers().get("Vary"),
            Some("Accept-Encoding,User-Agent,Cookie,Referer")
        );
        assert!(effect.context().is_empty());
    }
}
