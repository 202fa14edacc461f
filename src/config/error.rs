//! Configuration error types

use thiserror::Error;

/// Why the service refused to start with the configuration it was given.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is missing or could not be parsed into its field type.
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Every variable parsed, but a value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A semantic problem with one configuration value.
///
/// Variable names in messages are given without the `SUBSCRIPTIONS__` prefix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingRequired(&'static str),

    #[error("SERVER__PORT must not be 0")]
    InvalidPort,

    #[error("SERVER__REQUEST_TIMEOUT_SECS must be between 1 and {0}")]
    InvalidTimeout(u64),

    #[error("'{0}' is not an IP address and port")]
    InvalidBindAddress(String),

    #[error("DATABASE__URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("DATABASE__MIN_CONNECTIONS ({min}) exceeds DATABASE__MAX_CONNECTIONS ({max})")]
    InvalidPoolSize { min: u32, max: u32 },

    #[error("DATABASE__MAX_CONNECTIONS must be between 1 and {0}")]
    PoolSizeOutOfRange(u32),

    #[error("AUTH__JWT_SECRET must be at least {0} bytes")]
    SecretTooShort(usize),

    #[error("AUTH__TOKEN_TTL_SECS must be greater than zero")]
    InvalidTokenTtl,
}
