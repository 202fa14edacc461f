//! HTTP listener settings.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the HTTP server listens.
///
/// Every field is optional in the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to bind. Hostnames are rejected.
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated allowed origins, or `*`. No CORS layer when unset.
    pub cors_origins: Option<String>,
}

/// Deployment environment. Production switches logs to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,subscription_service=debug,sqlx=warn".into(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let candidate = format!("{}:{}", self.host, self.port);
        candidate
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress(candidate))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured origins, trimmed, with blank entries dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout(MAX_REQUEST_TIMEOUT_SECS));
        }
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(edit: impl FnOnce(&mut ServerConfig)) -> ServerConfig {
        let mut config = ServerConfig::default();
        edit(&mut config);
        config
    }

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn hostnames_are_not_bind_addresses() {
        let config = server(|c| c.host = "localhost".into());
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidBindAddress("localhost:8080".into()))
        );
    }

    #[test]
    fn ipv4_loopback_binds() {
        let config = server(|c| {
            c.host = "127.0.0.1".into();
            c.port = 3000;
        });
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn blank_cors_entries_are_dropped() {
        let config = server(|c| {
            c.cors_origins = Some(" https://a.example , ,https://b.example,".into())
        });
        assert_eq!(
            config.cors_origins_list(),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(ServerConfig::default().cors_origins_list().is_empty());
    }

    #[test]
    fn port_zero_is_rejected() {
        assert_eq!(
            server(|c| c.port = 0).validate(),
            Err(ValidationError::InvalidPort)
        );
    }

    #[test]
    fn timeout_must_be_within_bounds() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            assert_eq!(
                server(|c| c.request_timeout_secs = secs).validate(),
                Err(ValidationError::InvalidTimeout(MAX_REQUEST_TIMEOUT_SECS))
            );
        }
        assert!(server(|c| c.request_timeout_secs = MAX_REQUEST_TIMEOUT_SECS)
            .validate()
            .is_ok());
    }

    #[test]
    fn production_is_detected() {
        assert!(server(|c| c.environment = Environment::Production).is_production());
        assert!(!server(|c| c.environment = Environment::Staging).is_production());
    }
}
