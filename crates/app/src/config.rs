//! Dashboard configuration — a TOML document where every field has a default.
//!
//! The browser build embeds `hostwatch.toml` at compile time; an empty
//! document yields the defaults.

use std::time::Duration;

use serde::Deserialize;

use crate::monitoring::MonitoringOptions;
use crate::monitoring::chart::DEFAULT_CHART_POINTS;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend settings.
    pub api: ApiConfig,
    /// Polling settings.
    pub refresh: RefreshConfig,
    /// Monitoring view policy.
    pub monitoring: MonitoringConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Backend location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix of every REST path, e.g. `/api` or `https://monitor.lan/api`.
    pub base_url: String,
}

/// Polling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Milliseconds between two polls.
    pub interval_ms: u32,
}

/// Monitoring view policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Hide offline hosts instead of showing them with a badge.
    pub online_only: bool,
    /// Samples kept per host chart.
    pub chart_points: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed and
    /// [`ConfigError::Validation`] when a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.refresh.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "refresh.interval_ms must be non-zero".to_string(),
            ));
        }
        if self.monitoring.chart_points == 0 {
            return Err(ConfigError::Validation(
                "monitoring.chart_points must be non-zero".to_string(),
            ));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "unknown logging.level {:?}",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Poll period.
    #[must_use]
    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(u64::from(self.refresh.interval_ms))
    }

    /// Options of the monitoring view.
    #[must_use]
    pub fn monitoring_options(&self) -> MonitoringOptions {
        MonitoringOptions {
            online_only: self.monitoring.online_only,
            chart_points: self.monitoring.chart_points,
        }
    }

    /// Maximum log level, `info` when the configured one is unknown.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        self.logging.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            online_only: false,
            chart_points: DEFAULT_CHART_POINTS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
