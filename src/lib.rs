//! Resolve URL-encoded directive scripts into HTTP response behavior.
//!
//! A path segment such as `[mobile:response_404][meta_noindex+[vary_cookie,vary_referer]]`
//! is normalized, split into blocks bucketed by user-agent category, and
//! resolved per request into one flat directive list. The effect handlers
//! then turn that list into context variables, headers and a status code.

pub mod collate;
mod config;
pub mod effects;
mod engine;
mod error;
pub mod parse;
pub mod random;
pub mod resolve;
pub mod select;
mod types;
mod url;
mod user_agent;

pub use config::{ConfigError, EngineConfig};
pub use engine::Engine;
pub use error::CrawlbinError;
pub use parse::MalformedInputError;
pub use random::{FixedIndex, RandomSource, SeededRandom, ThreadRandom};
pub use select::Selection;
pub use types::{
    BlockBuckets, Category, Context, Directive, Effect, Headers, ResolutionReport, Response, Value,
};
pub use url::RequestTarget;
pub use user_agent::{BrowserFamily, UserAgent};
