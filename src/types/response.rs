use std::fmt;

use super::{Context, Effect, Headers};

/// Everything the rendering layer needs to produce the response bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Response {
    directives: Vec<String>,
    context: Context,
    headers: Headers,
    status: u16,
}

impl Response {
    /// A 200 response with no headers, carrying the resolved directives.
    pub fn new(directives: Vec<String>) -> Self {
        Self {
            directives,
            context: Context::new(),
            headers: Headers::new(),
            status: 200,
        }
    }

    /// Fold an effect in. Context keys and header names from the effect
    /// replace earlier ones; a status, if present, replaces the current one.
    pub fn apply(mut self, effect: Effect) -> Self {
        let (context, headers, status) = effect.into_parts();
        self.context.merge(context);
        self.headers.merge(headers);
        if let Some(status) = status {
            self.status = status;
        }
        self
    }

    #[must_use]
    pub fn directives(&self) -> &[String] {
        &self.directives
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status: {}", self.status)?;
        writeln!(f, "directives: [{}]", self.directives.join(", "))?;
        write!(f, "{}", self.headers)
    }
}
