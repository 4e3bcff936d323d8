//! # coinboard
//!
//! Client library for a crypto portfolio and trading-signal dashboard API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Newtypes, domain models, derived-view calculators, config (no I/O)
//! 2. **HTTP API**: `DashboardHttp`, one GET per endpoint, no retries
//! 3. **High-Level Client**: `DashboardClient` with nested sub-clients and a market cache
//! 4. **Polling**: `PollScope` / `PollHandle` / `Feed`: cancellable periodic refresh
//! 5. **Views**: `DashboardView` / `MarketDetailView` composites
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let snapshot = client.dashboard().get().await?;
//! let overview = PortfolioOverview::compute(&snapshot.accounts, &snapshot.tickers);
//!
//! let feeds = client.watch_dashboard();
//! while feeds.snapshot.clone().changed().await {
//!     if let Some(view) = feeds.view() { /* render */ }
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, calculators.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment-driven configuration.
pub mod config;

/// Composite views over the current snapshots.
pub mod view;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Polling ─────────────────────────────────────────────────────────

/// Periodic refresh scopes.
#[cfg(feature = "poll")]
pub mod poll;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{MarketCode, MinuteUnit, Side};

    // Domain types: account (includes valuation)
    pub use crate::domain::account::{
        cost_basis_value, profit_rate, total_asset_value, total_cost_basis, Account,
        AssetValuation, HoldingRow, PortfolioOverview,
    };

    // Domain types: market (includes name enrichment + search)
    pub use crate::domain::market::{filter_by_search, Market, MarketNames, MarketScoped, Named};

    // Domain types: ticker, candle
    pub use crate::domain::candle::Candle;
    pub use crate::domain::ticker::{Ticker, TickerBook};

    // Domain types: order
    pub use crate::domain::order::{FillMarker, OrderHistory, OrderState, OrderType};

    // Domain types: signal, dashboard
    pub use crate::domain::dashboard::DashboardSnapshot;
    pub use crate::domain::signal::{LatestSignals, SignalAction, SignalLog};

    // Views
    pub use crate::view::{DashboardView, MarketDetailView};

    // Errors + config
    pub use crate::config::Config;
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountsClient, CandlesClient, DashboardClient, DashboardClientBuilder,
        DashboardSubClient, MarketsClient, OrdersClient, SignalsClient, TickersClient,
    };

    // Polling
    #[cfg(feature = "poll")]
    pub use crate::poll::{Feed, LoadState, OnFailure, PollHandle, PollScope, SourceState};
    #[cfg(all(feature = "http", feature = "poll"))]
    pub use crate::poll::{DashboardFeeds, MarketFeeds};
}
