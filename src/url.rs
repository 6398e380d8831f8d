/// URLs surrounding the directive segment of one request.
///
/// The last path component carries the directives; everything before it is
/// inert and only used to build the "previous path" URL that redirects and
/// `*_next_block` canonicals point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    base: String,
    current: String,
    previous: String,
    path: String,
    segment: String,
}

impl RequestTarget {
    /// Split a request into its directive segment and surrounding URLs.
    ///
    /// `path` is the request path as received, e.g. `/a/[h1_off]/`.
    #[must_use]
    pub fn new(scheme: &str, host: &str, path: &str) -> Self {
        let base = format!("{scheme}://{host}");
        let current = format!("{base}{path}");

        let trimmed = path.trim_matches('/');
        let (earlier, segment) = match trimmed.rsplit_once('/') {
            Some((earlier, last)) => (earlier, last),
            None => ("", trimmed),
        };

        let previous = if earlier.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{earlier}/")
        };

        Self {
            base,
            current,
            previous,
            path: trimmed.to_owned(),
            segment: segment.to_owned(),
        }
    }

    /// `scheme://host`, without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The full URL of this request.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The URL with the directive segment removed, always ending in one `/`.
    #[must_use]
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// The request path without leading or trailing slashes.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The directive segment handed to the engine.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }
}
