use thiserror::Error;

/// Configuration failures surfaced during startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable '{0}'")]
    MissingEnvVar(String),

    /// An environment variable is set but could not be interpreted.
    #[error("Invalid value '{value}' for environment variable '{var}'")]
    InvalidValue {
        /// The environment variable name
        var: String,
        /// The rejected value
        value: String,
    },
}
