//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CYCLE_COMPANION` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cycle_companion::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod cycle;
mod database;
mod error;
mod server;

pub use cycle::{CycleSettings, IdeasSettings};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so the server starts with no environment at
/// all and serves fallback ideas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Optional idea store (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Cycle calculation defaults and input policy
    #[serde(default)]
    pub cycle: CycleSettings,

    /// Idea listing defaults
    #[serde(default)]
    pub ideas: IdeasSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CYCLE_COMPANION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CYCLE_COMPANION__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `CYCLE_COMPANION__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CYCLE_COMPANION")
                    .prefix_separator("__")
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
        self.database.validate()?;
        self.cycle.validate()?;
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
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "CYCLE_COMPANION__DATABASE__URL",
        "CYCLE_COMPANION__SERVER__PORT",
        "CYCLE_COMPANION__SERVER__ENVIRONMENT",
        "CYCLE_COMPANION__CYCLE__DEFAULT_LENGTH",
        "CYCLE_COMPANION__CYCLE__ENFORCE_PLAUSIBLE_LENGTH",
        "CYCLE_COMPANION__IDEAS__DEFAULT_LIMIT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.database.is_configured());
        assert_eq!(config.cycle.default_length, 28);
        assert_eq!(config.ideas.default_limit, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_database_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CYCLE_COMPANION__DATABASE__URL", "postgresql://test@localhost/test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.database.url.as_ref().map(|u| u.expose_secret().clone()),
            Some("postgresql://test@localhost/test".to_string())
        );
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CYCLE_COMPANION__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CYCLE_COMPANION__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_cycle_settings_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CYCLE_COMPANION__CYCLE__DEFAULT_LENGTH", "30");
        env::set_var("CYCLE_COMPANION__CYCLE__ENFORCE_PLAUSIBLE_LENGTH", "true");
        env::set_var("CYCLE_COMPANION__IDEAS__DEFAULT_LIMIT", "5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.cycle.default_length, 30);
        assert!(config.cycle.enforce_plausible_length);
        assert_eq!(config.ideas.default_limit, 5);
    }
}
