//! Configuration management for the dashboard
//!
//! Every field has a built-in default. The browser build can override them
//! through `window.TREVEE_DASHBOARD_*` globals set before the bundle loads.

use std::time::Duration;

use crate::error::{DashboardError, Result};

/// Prefix shared by all override keys
pub const KEY_PREFIX: &str = "TREVEE_DASHBOARD_";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Metrics endpoint, relative to the page origin or absolute
    pub endpoint: String,

    /// Refresh period of the polling timer
    pub refresh_interval_ms: u64,

    /// Token symbol appended to supply figures
    pub token_symbol: String,

    /// Shown when the payload has no (or a zero) total supply
    pub default_total_supply: f64,

    /// Shown when the plasma record has no (or a zero) holder count
    pub fallback_plasma_holders: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            log_level: "info".to_string(),
            endpoint: "/api/metrics".to_string(),
            refresh_interval_ms: 30_000,
            token_symbol: "TREVEE".to_string(),
            default_total_supply: 50_000_000.0,
            fallback_plasma_holders: 19.0,
        }
    }
}

impl Config {
    /// Build configuration from string overrides.
    ///
    /// `lookup` receives the key without [`KEY_PREFIX`]. Unparseable values
    /// fall back to the default for that field.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),

            endpoint: lookup("ENDPOINT").unwrap_or(defaults.endpoint),

            refresh_interval_ms: lookup("REFRESH_MS")
                .map(|v| v.trim().parse().unwrap_or(defaults.refresh_interval_ms))
                .unwrap_or(defaults.refresh_interval_ms),

            token_symbol: lookup("TOKEN_SYMBOL").unwrap_or(defaults.token_symbol),

            default_total_supply: lookup("DEFAULT_TOTAL_SUPPLY")
                .map(|v| v.trim().parse().unwrap_or(defaults.default_total_supply))
                .unwrap_or(defaults.default_total_supply),

            fallback_plasma_holders: lookup("FALLBACK_PLASMA_HOLDERS")
                .map(|v| v.trim().parse().unwrap_or(defaults.fallback_plasma_holders))
                .unwrap_or(defaults.fallback_plasma_holders),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(DashboardError::Config("endpoint must not be empty".into()));
        }
        if self.refresh_interval_ms < 1_000 {
            return Err(DashboardError::Config(
                "refresh_interval_ms must be at least 1000".into(),
            ));
        }
        if !self.default_total_supply.is_finite() || self.default_total_supply < 0.0 {
            return Err(DashboardError::Config(
                "default_total_supply must be a non-negative number".into(),
            ));
        }
        Ok(())
    }

    /// Refresh period as a `Duration`
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Max log level, `Info` for anything unrecognised
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .trim()
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }

    /// Resolve the endpoint against the page origin.
    ///
    /// Absolute endpoints are returned unchanged.
    pub fn metrics_url(&self, origin: &str) -> String {
        let endpoint = self.endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        let origin = origin.trim_end_matches('/');
        if endpoint.starts_with('/') {
            format!("{origin}{endpoint}")
        } else {
            format!("{origin}/{endpoint}")
        }
    }
}
