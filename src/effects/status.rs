use crate::{Directive, Effect};

#[derive(Debug, Clone, Copy)]
enum Extra {
    None,
    Location,
    Authenticate,
}

// Checked in order; the first directive present decides the status.
const STATUS_TABLE: [(Directive, u16, Extra); 13] = [
    (Directive::Response301, 301, Extra::Location),
    (Directive::Response302, 302, Extra::Location),
    (Directive::Response303, 303, Extra::Location),
    (Directive::Response307, 307, Extra::Location),
    (Directive::Response308, 308, Extra::Location),
    (Directive::Response400, 400, Extra::None),
    (Directive::Response401, 401, Extra::Authenticate),
    (Directive::Response403, 403, Extra::None),
    (Directive::Response404, 404, Extra::None),
    (Directive::Response410, 410, Extra::None),
    (Directive::Response418, 418, Extra::None),
    (Directive::Response500, 500, Extra::None),
    (Directive::Response503, 503, Extra::None),
];

/// Map `response_*` directives to a status code and its companion header.
///
/// Redirects point `Location` at `previous`; a 401 carries
/// `WWW-Authenticate: Basic realm="<realm>"`. Always sets a status, 200 when
/// no response directive is present.
pub fn handle_redirect<S: AsRef<str>>(directives: &[S], previous: &str, realm: &str) -> Effect {
    let Some(&(_, status, extra)) = STATUS_TABLE
        .iter()
        .find(|(directive, _, _)| directive.is_in(directives))
    else {
        return Effect::new().with_status(200);
    };

    let effect = Effect::new().with_status(status);
    match extra {
        Extra::None => effect,
        Extra::Location => effect.with_header("Location", previous),
        Extra::Authenticate => {
            effect.with_header("WWW-Authenticate", format!("Basic realm=\"{realm}\""))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Headers;

    const REALM: &str = "crawlbin:";

    #[test]
    fn no_directives_is_200() {
        let effect = handle_redirect::<&str>(&[], "http://x/", REALM);
        assert_eq!(effect.status(), Some(200));
        assert!(effect.headers().is_empty());
        assert!(effect.context().is_empty());
    }

    #[test]
    fn every_status_code() {
        for (directive, status, _) in STATUS_TABLE {
            let effect = handle_redirect(&[directive.as_str()], "testcase", REALM);
            assert_eq!(effect.status(), Some(status), "failed for {directive}");
            assert!(effect.context().is_empty());
        }
    }

    #[test]
    fn redirects_set_location() {
        for token in [
            "response_301",
            "response_302",
            "response_303",
            "response_307",
            "response_308",
        ] {
            let effect = handle_redirect(&[token], "testcase", REALM);
            assert_eq!(
                effect.headers(),
                &Headers::new().set("Location", "testcase"),
                "failed for {token}"
            );
        }
    }

    #[test]
    fn errors_set_no_headers() {
        for token in [
            "response_400", "response_403", "response_404", "response_410",
            "response_418", "response_500", "response_503",
        ] {
            let effect = handle_redirect(&[token], "testcase", REALM);
            assert!(effect.headers().is_empty(), "failed for {token}");
        }
    }

    #[test]
    fn unauthorized_sets_realm() {
        let effect = handle_redirect(&["response_401"], "testcase", REALM);
        assert_eq!(effect.status(), Some(401));
        assert_eq!(
            effect.headers().get("WWW-Authenticate"),
            Some("Basic realm=\"crawlbin:\"")
        );
    }

    #[test]
    fn first_match_wins() {
        let effect = handle_redirect(&["response_404", "response_301"], "http://x/", REALM);
        assert_eq!(effect.status(), Some(301));
        assert_eq!(effect.headers().get("Location"), Some("http://x/"));
    }

    #[test]
    fn unknown_directives_are_inert() {
        let effect = handle_redirect(&["response_999", "h1_off"], "http://x/", REALM);
        assert_eq!(effect.status(), Some(200));
        assert!(effect.headers().is_empty());
    }
}
