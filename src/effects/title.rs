use crate::random::{choose, RandomSource};
use crate::{Directive, Effect, EngineConfig};

/// Set the `title` context variable, drawing from the configured pool when
/// `random_title` is present.
pub fn title<S: AsRef<str>>(
    directives: &[S],
    config: &EngineConfig,
    source: &dyn RandomSource,
) -> Effect {
    let title = if Directive::RandomTitle.is_in(directives) {
        choose(source, &config.titles).unwrap_or(&config.default_title)
    } else {
        &config.default_title
    };
    Effect::new().with_context("title", title.as_str())
}
