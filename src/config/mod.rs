//! Adapter configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `BLOCKONOMICS` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use blockonomics_adapter::config::ProviderConfig;
//!
//! let config = ProviderConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod provider;

pub use error::{ConfigError, ValidationError};
pub use provider::{ProviderConfig, DEFAULT_BASE_URL};

impl ProviderConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `BLOCKONOMICS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to the production Blockonomics defaults
    ///
    /// # Environment Variable Format
    ///
    /// - `BLOCKONOMICS__BASE_URL=https://...` -> `base_url`
    /// - `BLOCKONOMICS__DEFAULT_CURRENCY=EUR` -> `default_currency`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types. Missing values fall back to defaults rather than erroring.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BLOCKONOMICS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}
