//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAPGOV_` prefix and nested values use double underscores as
//! separators (e.g. `CAPGOV_GOVERNANCE__CAPEX_THRESHOLD=750000`).
//!
//! # Example
//!
//! ```no_run
//! use capgov::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod governance;

pub use error::{ConfigError, ValidationError};
pub use governance::GovernanceConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Governance thresholds (classification bands, NIIF thresholds,
    /// committee approval, activation split, alerting).
    #[serde(default)]
    pub governance: GovernanceConfig,
}

impl AppConfig {
    /// Loads configuration from the environment (and a `.env` file if
    /// present). Missing values fall back to the documented defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CAPGOV")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = source.try_deserialize()?;
        Ok(app)
    }

    /// Validates all configuration sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.governance.validate()?;
        Ok(())
    }
}
