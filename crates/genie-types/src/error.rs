use thiserror::Error;

/// Errors raised while querying a Genie space.
///
/// Backends construct these; the agent and tool adapters pass them through
/// unchanged.
#[derive(Debug, Error)]
pub enum GenieError {
    #[error("genie backend error: {message}")]
    Backend { message: String },

    #[error("genie space unavailable: {0}")]
    Unavailable(String),

    #[error("invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Errors from loading a Genie configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {message}")]
    Read { path: String, message: String },

    #[error("failed to parse '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

impl From<ConfigError> for GenieError {
    fn from(err: ConfigError) -> Self {
        GenieError::Config(err.to_string())
    }
}
