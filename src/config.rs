//! # Configuration
//!
//! Runtime settings for the price source, the maps client and logging.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. an optional file (`toml`, `yaml` or `json`, chosen by extension)
//! 3. environment variables `VEHICLES_<SECTION>__<KEY>`, after `.env` has
//!    been read
//!
//! ```text
//! VEHICLES_PRICING__MODE=remote
//! VEHICLES_PRICING__ENDPOINT=http://pricing:8082
//! VEHICLES_LOGGING__FORMAT=json
//! ```

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "VEHICLES";

/// Default pricing service endpoint.
pub const DEFAULT_PRICING_ENDPOINT: &str = "http://localhost:8082";

/// Default maps service endpoint.
pub const DEFAULT_MAPS_ENDPOINT: &str = "http://localhost:9191";

/// Default timeout for remote calls in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Where vehicle prices come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSourceMode {
    /// In-process catalog generated at startup.
    #[default]
    Catalog,
    /// Remote pricing service over HTTP.
    Remote,
}

/// Pricing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PricingConfig {
    /// Price source selection.
    pub mode: PriceSourceMode,
    /// Base URL of the pricing service. Only used in remote mode.
    pub endpoint: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Maps service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MapsConfig {
    /// Base URL of the maps service.
    pub endpoint: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Pricing settings.
    pub pricing: PricingConfig,
    /// Maps settings.
    pub maps: MapsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig {
                mode: PriceSourceMode::Catalog,
                endpoint: DEFAULT_PRICING_ENDPOINT.to_string(),
                timeout_ms: DEFAULT_TIMEOUT_MS,
            },
            maps: MapsConfig {
                endpoint: DEFAULT_MAPS_ENDPOINT.to_string(),
                timeout_ms: DEFAULT_TIMEOUT_MS,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, an optional file and the
    /// environment, then validates it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the file is missing or malformed, and
    /// `ConfigError::Invalid` if validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::debug!(path = %env_file.display(), "loaded .env");
        }

        let mut builder = defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        from_builder(builder)
    }

    /// Checks that endpoints are HTTP URLs and timeouts are positive.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pricing.mode == PriceSourceMode::Remote {
            validate_endpoint("pricing.endpoint", &self.pricing.endpoint)?;
        }
        validate_timeout("pricing.timeout_ms", self.pricing.timeout_ms)?;
        validate_endpoint("maps.endpoint", &self.maps.endpoint)?;
        validate_timeout("maps.timeout_ms", self.maps.timeout_ms)?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level must not be empty"));
        }
        Ok(())
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("pricing.mode", "catalog")?
        .set_default("pricing.endpoint", DEFAULT_PRICING_ENDPOINT)?
        .set_default("pricing.timeout_ms", DEFAULT_TIMEOUT_MS)?
        .set_default("maps.endpoint", DEFAULT_MAPS_ENDPOINT)?
        .set_default("maps.timeout_ms", DEFAULT_TIMEOUT_MS)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "pretty")?)
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

fn validate_endpoint(key: &str, endpoint: &str) -> Result<(), ConfigError> {
    let rest = endpoint
        .strip_prefix("http://")
        .or_else(|| endpoint.strip_prefix("https://"));
    match rest {
        Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
        _ => Err(ConfigError::invalid(format!(
            "{key} must be an http(s) URL, got '{endpoint}'"
        ))),
    }
}

fn validate_timeout(key: &str, timeout_ms: u64) -> Result<(), ConfigError> {
    if timeout_ms == 0 {
        return Err(ConfigError::invalid(format!("{key} must be positive")));
    }
    Ok(())
}
