use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::collate::collate;
use crate::config::{ConfigError, EngineConfig};
use crate::effects;
use crate::parse::MalformedInputError;
use crate::random::{RandomSource, ThreadRandom};
use crate::select::select;
use crate::url::RequestTarget;
use crate::user_agent::UserAgent;
use crate::{CrawlbinError, Effect, ResolutionReport, Response};

/// Resolves directive path segments into responses.
///
/// Holds only configuration and the shared random source, so one engine can
/// serve every request. Thread-safe and designed to live behind `Arc`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use crawlbin::{Engine, FixedIndex};
///
/// let engine = Engine::new().with_random(Arc::new(FixedIndex(0)));
/// let directives = engine
///     .resolve("[mobile:response_404][h1_off+vary_cookie]", "curl/8.0")
///     .unwrap();
/// assert_eq!(directives, vec!["h1_off", "vary_cookie"]);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    random: Arc<dyn RandomSource>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine with the default configuration drawing from [`ThreadRandom`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            random: Arc::new(ThreadRandom),
        }
    }

    /// An engine with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            random: Arc::new(ThreadRandom),
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlbinError`] on I/O, parse, or validation failure.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, CrawlbinError> {
        let config = EngineConfig::from_file(path)?;
        Ok(Self::with_config(config)?)
    }

    /// Replace the random source. Every draw made by this engine goes
    /// through it.
    #[must_use]
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve a path segment into the directive list governing a response
    /// for this user agent.
    ///
    /// An empty list means no block applied, which renders as a plain 200.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInputError`] if the segment's brackets are
    /// unbalanced or nested too deeply.
    pub fn resolve(
        &self,
        segment: &str,
        user_agent: &str,
    ) -> Result<Vec<String>, MalformedInputError> {
        let buckets = collate(segment, self.random.as_ref())?;
        let user_agent = UserAgent::parse(user_agent);
        Ok(select(&buckets, &user_agent, self.random.as_ref()).directives())
    }

    /// Resolve with diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInputError`] under the same conditions as
    /// [`resolve()`](Self::resolve).
    pub fn resolve_detailed(
        &self,
        segment: &str,
        user_agent: &str,
    ) -> Result<ResolutionReport, MalformedInputError> {
        let start = Instant::now();
        let buckets = collate(segment, self.random.as_ref())?;
        let user_agent = UserAgent::parse(user_agent);
        let selection = select(&buckets, &user_agent, self.random.as_ref());
        let directives = selection.directives();
        let duration = start.elapsed();

        Ok(ResolutionReport::new(
            user_agent,
            selection.matched().to_vec(),
            selection.pool().to_vec(),
            selection.chosen().map(str::to_owned),
            directives,
            duration,
        ))
    }

    /// Resolve the directive segment of `target` and build the full response
    /// for it.
    ///
    /// Waits out any `delay_*` directives before returning. Dropping the
    /// future cancels the wait.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInputError`] if the segment cannot be parsed.
    pub async fn respond(
        &self,
        user_agent: &str,
        target: &RequestTarget,
    ) -> Result<Response, MalformedInputError> {
        let directives = self.resolve(target.segment(), user_agent)?;
        Ok(self.respond_to(directives, target).await)
    }

    /// Run the effect handlers over an already resolved directive list.
    ///
    /// Effects are folded in a fixed order: request URLs, h1, title,
    /// index/follow, canonical, vary, delay, then status. A later effect
    /// overwrites context keys and headers set by an earlier one, and the
    /// status handler always decides the status code.
    pub async fn respond_to(&self, directives: Vec<String>, target: &RequestTarget) -> Response {
        let random = self.random.as_ref();

        let request = Effect::new()
            .with_context("url", target.path())
            .with_context("previous_parts_url", target.previous());
        let h1 = applied("h1", effects::h1(&directives));
        let title = applied("title", effects::title(&directives, &self.config, random));
        let robots = applied("index_follow", effects::index_follow(&directives));
        let canonical = applied(
            "canonical",
            effects::canonical(&directives, target, &self.config.random_url_fragments, random),
        );
        let vary = applied("vary", effects::vary(&directives));
        let delay = applied(
            "delay",
            effects::delay(&directives, self.config.delay_unit()).await,
        );
        let status = applied(
            "status",
            effects::handle_redirect(&directives, target.previous(), &self.config.auth_realm),
        );

        Response::new(directives)
            .apply(request)
            .apply(h1)
            .apply(title)
            .apply(robots)
            .apply(canonical)
            .apply(vary)
            .apply(delay)
            .apply(status)
    }
}

fn applied(family: &'static str, effect: Effect) -> Effect {
    debug!(
        family,
        context = effect.context().len(),
        headers = effect.headers().len(),
        status = ?effect.status(),
        "applied effect"
    );
    effect
}
