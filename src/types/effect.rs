use super::{Context, Headers, Value};

/// Partial response produced by one effect handler.
///
/// Handlers never mutate shared state; the caller folds effects into a
/// [`Response`](super::Response) in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Effect {
    context: Context,
    headers: Headers,
    status: Option<u16>,
}

impl Effect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.context.insert(name, value.into());
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The status this effect sets, if it sets one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub(crate) fn into_parts(self) -> (Context, Headers, Option<u16>) {
        (self.context, self.headers, self.status)
    }
}
