//! Application configuration module
//!
//! Settings are read from the process environment (after loading `.env`, if
//! present) with the `SUBSCRIPTIONS` prefix and `__` between nesting levels:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SUBSCRIPTIONS__SERVER__PORT` | `server.port` |
//! | `SUBSCRIPTIONS__DATABASE__URL` | `database.url` |
//! | `SUBSCRIPTIONS__AUTH__JWT_SECRET` | `auth.jwt_secret` |
//!
//! Every section has defaults except the database URL and the signing
//! secret. Those two are reported by [`AppConfig::validate`], not by loading.
//!
//! ```no_run
//! use subscription_service::config::AppConfig;
//!
//! # fn main() -> Result<(), subscription_service::config::ConfigError> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_SECRET_BYTES};
pub use database::{DatabaseConfig, MAX_POOL_SIZE};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

const ENV_PREFIX: &str = "SUBSCRIPTIONS";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Read `.env` and the process environment.
    ///
    /// # Errors
    ///
    /// `ConfigError::Load` when a variable cannot be parsed into its field
    /// (for example a non-numeric port).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(source: config::Environment) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(source.separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Check every section, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
