//! Dashboard domain: the aggregate snapshot returned by one dashboard poll.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::account::{Account, PortfolioOverview};
use crate::domain::market::{Market, MarketNames};
use crate::domain::order::OrderHistory;
use crate::domain::ticker::{Ticker, TickerBook};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the overview screens need, captured by a single request.
///
/// Each successful poll produces a new snapshot that replaces the previous
/// one wholesale; snapshots are never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Server capture time. `None` when the backend sent an unreadable value.
    pub timestamp: Option<DateTime<Utc>>,
    pub accounts: Vec<Account>,
    pub markets: Vec<Market>,
    pub tickers: Vec<Ticker>,
    pub orders: Vec<OrderHistory>,
}

impl DashboardSnapshot {
    pub fn market_names(&self) -> MarketNames {
        MarketNames::new(&self.markets)
    }

    pub fn ticker_book(&self) -> TickerBook {
        TickerBook::new(&self.tickers)
    }

    pub fn portfolio(&self) -> PortfolioOverview {
        PortfolioOverview::compute(&self.accounts, &self.tickers)
    }
}
