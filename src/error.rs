/// Configuration error types.
///
/// The simulation itself has no failure surface: bad runtime values are
/// clamped inside the core.  Only loading and validating a [`SimConfig`]
/// can fail, and the caller decides whether to abort or fall back to the
/// defaults.
///
/// [`SimConfig`]: crate::config::SimConfig

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML or has a field of the wrong type.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value parsed fine but is outside what the simulation accepts.
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
            ConfigError::Invalid {
                name,
                value,
                reason,
            } => write!(f, "config value '{}' = {} is invalid: {}", name, value, reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
