use std::fmt;
use std::time::Duration;

use super::Category;
use crate::user_agent::UserAgent;

/// Detailed resolution report returned by
/// [`Engine::resolve_detailed()`](crate::Engine::resolve_detailed).
///
/// Records the user-agent facts, which categories matched, every block that
/// was eligible, the block that was drawn, and the wall-clock duration.
#[derive(Debug, Clone)]
#[must_use]
pub struct ResolutionReport {
    user_agent: UserAgent,
    matched: Vec<Category>,
    pool: Vec<String>,
    chosen: Option<String>,
    directives: Vec<String>,
    duration: Duration,
}

impl ResolutionReport {
    pub(crate) fn new(
        user_agent: UserAgent,
        matched: Vec<Category>,
        pool: Vec<String>,
        chosen: Option<String>,
        directives: Vec<String>,
        duration: Duration,
    ) -> Self {
        Self {
            user_agent,
            matched,
            pool,
            chosen,
            directives,
            duration,
        }
    }

    #[must_use]
    pub fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    /// Fact-gated categories that contributed blocks. Empty means the `none`
    /// bucket was the fallback.
    #[must_use]
    pub fn matched(&self) -> &[Category] {
        &self.matched
    }

    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    #[must_use]
    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    /// The directive list, same as [`Engine::resolve()`](crate::Engine::resolve).
    #[must_use]
    pub fn directives(&self) -> &[String] {
        &self.directives
    }

    /// Wall-clock duration of the resolution.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_agent: {}", self.user_agent)?;
        let matched: Vec<&str> = self.matched.iter().map(Category::as_str).collect();
        if matched.is_empty() {
            write!(f, ", matched: none")?;
        } else {
            write!(f, ", matched: [{}]", matched.join(", "))?;
        }
        write!(f, ", pool: {}", self.pool.len())?;
        match &self.chosen {
            Some(block) => write!(f, ", chosen: [{block}]")?,
            None => write!(f, ", chosen: none")?,
        }
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
