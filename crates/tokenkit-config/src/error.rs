//! Configuration error types.

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading and resolving profiles.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a config file.
    #[error("failed to read config file '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Profile not found in any config layer or the environment.
    #[error(
        "profile '{0}' not found — define [profile.{0}] in tokenkit.toml or set TOKENKIT_{0}_* environment variables"
    )]
    ProfileNotFound(String),

    /// Missing required field.
    #[error("missing required field '{field}' for profile '{profile}'")]
    MissingField { field: String, profile: String },
}
