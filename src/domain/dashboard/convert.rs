//! Conversion: DashboardResponse → DashboardSnapshot.

use super::wire::DashboardResponse;
use super::DashboardSnapshot;
use crate::domain::account::Account;
use crate::domain::market::markets_from_wire;
use crate::domain::order::orders_from_wire;
use crate::domain::ticker::Ticker;
use chrono::{DateTime, Utc};

impl From<DashboardResponse> for DashboardSnapshot {
    fn from(source: DashboardResponse) -> Self {
        let timestamp = DateTime::parse_from_rfc3339(source.timestamp.trim())
            .map(|t| t.with_timezone(&Utc))
            .ok();
        if timestamp.is_none() && !source.timestamp.is_empty() {
            tracing::debug!(value = %source.timestamp, "Unreadable dashboard timestamp");
        }

        Self {
            timestamp,
            accounts: source.accounts.into_iter().map(Account::from).collect(),
            markets: markets_from_wire(source.markets),
            tickers: source.tickers.into_iter().map(Ticker::from).collect(),
            orders: orders_from_wire(source.orders),
        }
    }
}
