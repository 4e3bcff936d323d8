//! High-level client: `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::config::Config;
use crate::domain::account::client::Accounts;
use crate::domain::candle::client::Candles;
use crate::domain::dashboard::client::Dashboard;
use crate::domain::market::client::Markets;
use crate::domain::market::Market;
use crate::domain::order::client::Orders;
use crate::domain::signal::client::Signals;
use crate::domain::ticker::client::Tickers;
use crate::error::SdkError;
use crate::http::DashboardHttp;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::candle::client::Candles as CandlesClient;
pub use crate::domain::dashboard::client::Dashboard as DashboardSubClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::signal::client::Signals as SignalsClient;
pub use crate::domain::ticker::client::Tickers as TickersClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors for each domain:
/// `client.accounts()`, `client.markets()`, etc.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) http: DashboardHttp,
    pub(crate) config: Config,
    /// Market list cache: (markets, fetched_at). Market reference data
    /// changes rarely, so it is shared across sub-client calls.
    pub(crate) market_cache: Arc<RwLock<Option<(Arc<Vec<Market>>, Instant)>>>,
    pub(crate) market_cache_ttl: Duration,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    /// Build a client from environment configuration.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::builder().config(Config::from_env()?).build()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn tickers(&self) -> Tickers<'_> {
        Tickers { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn signals(&self) -> Signals<'_> {
        Signals { client: self }
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        *self.market_cache.write().await = None;
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    config: Config,
    market_cache_ttl: Duration,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            market_cache_ttl: Duration::from_secs(60),
        }
    }
}

impl DashboardClientBuilder {
    /// Replace the whole configuration (e.g. one loaded from the environment).
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.api_url = url.to_string();
        self
    }

    pub fn dashboard_interval(mut self, interval: Duration) -> Self {
        self.config.dashboard_interval = interval;
        self
    }

    pub fn market_interval(mut self, interval: Duration) -> Self {
        self.config.market_interval = interval;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn market_cache_ttl(mut self, ttl: Duration) -> Self {
        self.market_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<DashboardClient, SdkError> {
        if self.config.dashboard_interval.is_zero() || self.config.market_interval.is_zero() {
            return Err(SdkError::Config("polling intervals must be non-zero".into()));
        }
        Ok(DashboardClient {
            http: DashboardHttp::new(&self.config.api_url, self.config.request_timeout)?,
            config: self.config,
            market_cache: Arc::new(RwLock::new(None)),
            market_cache_ttl: self.market_cache_ttl,
        })
    }
}
