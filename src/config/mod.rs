//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FLIGHT_ROSTER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use flight_roster::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod access;
mod catalog;
mod error;
mod registry;
mod server;

pub use access::AccessConfig;
pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use registry::RegistryConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Role catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Who may open flights
    #[serde(default)]
    pub access: AccessConfig,

    /// Idle expiry
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FLIGHT_ROSTER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FLIGHT_ROSTER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FLIGHT_ROSTER__ACCESS__ALLOWED_CREATORS=alice,bob` -> `access.allowed_creators`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FLIGHT_ROSTER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.catalog.validate()?;
        self.registry.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "FLIGHT_ROSTER__SERVER__PORT",
        "FLIGHT_ROSTER__SERVER__ENVIRONMENT",
        "FLIGHT_ROSTER__SERVER__LOG_FORMAT",
        "FLIGHT_ROSTER__ACCESS__ALLOWED_CREATORS",
        "FLIGHT_ROSTER__REGISTRY__IDLE_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.catalog.path.is_none());
        assert!(config.access.allowed_creators_list().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FLIGHT_ROSTER__SERVER__PORT", "3000");
        env::set_var("FLIGHT_ROSTER__SERVER__LOG_FORMAT", "json");
        env::set_var("FLIGHT_ROSTER__ACCESS__ALLOWED_CREATORS", "alice,bob");
        env::set_var("FLIGHT_ROSTER__REGISTRY__IDLE_TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.access.allowed_creators_list(), vec!["alice", "bob"]);
        assert_eq!(config.registry.idle_timeout(), None);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FLIGHT_ROSTER__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
