use thiserror::Error;

use crate::config::ConfigError;
use crate::parse::MalformedInputError;

/// Unified error type covering malformed input, configuration, and I/O.
///
/// Returned by convenience methods like
/// [`EngineConfig::from_file()`](crate::EngineConfig::from_file) and
/// [`Engine::from_config_file()`](crate::Engine::from_config_file).
#[derive(Debug, Error)]
pub enum CrawlbinError {
    #[error(transparent)]
    Malformed(#[from] MalformedInputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
