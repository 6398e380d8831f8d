use crate::random::{choose, RandomSource};

/// Build a directive URL on `base` from one of `fragments`, picked uniformly.
///
/// The result always ends in `/`. With no fragments it is the bare origin.
pub fn random_url(base: &str, fragments: &[String], source: &dyn RandomSource) -> String {
    match choose(source, fragments) {
        Some(fragment) => format!("{base}/{fragment}/"),
        None => format!("{base}/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedIndex;
    use crate::EngineConfig;

    #[test]
    fn appends_fragment() {
        let fragments = EngineConfig::default().random_url_fragments;
        assert_eq!(
            random_url("http://x", &fragments, &FixedIndex(1)),
            "http://x/response_301/"
        );
    }

    #[test]
    fn every_pick_is_a_fragment() {
        let fragments = EngineConfig::default().random_url_fragments;
        for idx in 0..fragments.len() {
            let url = random_url("http://x", &fragments, &FixedIndex(idx));
            let inner = url
                .strip_prefix("http://x/")
                .and_then(|rest| rest.strip_suffix('/'))
                .unwrap();
            assert!(fragments.iter().any(|f| f == inner), "unexpected {url}");
        }
    }

    #[test]
    fn no_fragments() {
        assert_eq!(random_url("http://x", &[], &FixedIndex(0)), "http://x/");
    }
}
