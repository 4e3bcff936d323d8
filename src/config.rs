//! Environment-driven configuration.

use crate::domain::candle::DEFAULT_CANDLE_COUNT;
use crate::domain::signal::DEFAULT_HISTORY_LIMIT;
use crate::error::SdkError;
use crate::network::{API_URL_ENV, DEFAULT_API_URL};
use std::time::Duration;

pub const DASHBOARD_INTERVAL_ENV: &str = "COINBOARD_DASHBOARD_INTERVAL_SECS";
pub const MARKET_INTERVAL_ENV: &str = "COINBOARD_MARKET_INTERVAL_SECS";
pub const REQUEST_TIMEOUT_ENV: &str = "COINBOARD_REQUEST_TIMEOUT_SECS";

/// Client and polling configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// API base URL, without the `/api` prefix.
    pub api_url: String,
    /// Refresh cadence for dashboard-wide data.
    pub dashboard_interval: Duration,
    /// Refresh cadence for per-market detail data.
    pub market_interval: Duration,
    pub request_timeout: Duration,
    /// Candles requested per chart fetch.
    pub candle_count: u32,
    /// Signal log entries requested per history fetch.
    pub signal_history_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            dashboard_interval: Duration::from_secs(5),
            market_interval: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            candle_count: DEFAULT_CANDLE_COUNT,
            signal_history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or blank keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(API_URL_ENV) {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(v) = get(DASHBOARD_INTERVAL_ENV) {
            config.dashboard_interval = parse_secs(DASHBOARD_INTERVAL_ENV, &v)?;
        }
        if let Some(v) = get(MARKET_INTERVAL_ENV) {
            config.market_interval = parse_secs(MARKET_INTERVAL_ENV, &v)?;
        }
        if let Some(v) = get(REQUEST_TIMEOUT_ENV) {
            config.request_timeout = parse_secs(REQUEST_TIMEOUT_ENV, &v)?;
        }

        tracing::debug!(api_url = %config.api_url, "Loaded configuration");
        Ok(config)
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<Duration, SdkError> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        SdkError::Config(format!(
            "{key} must be a whole number of seconds, got {raw:?}"
        ))
    })?;
    if secs == 0 {
        return Err(SdkError::Config(format!("{key} must be greater than zero")));
    }
    Ok(Duration::from_secs(secs))
}
