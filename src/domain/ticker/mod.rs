//! Ticker domain: current price snapshots per market.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod view;
pub mod wire;

use crate::domain::market::MarketScoped;
use crate::shared::MarketCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use view::ticker_rows;

/// Current price snapshot for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub market: MarketCode,
    pub trade_price: Decimal,
    /// Change versus the previous close as a fraction (`0.012` = +1.2%).
    pub signed_change_rate: Decimal,
    pub acc_trade_price_24h: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
}

/// Direction of the 24h change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Rise,
    Even,
    Fall,
}

impl Ticker {
    /// Change rate as a percentage.
    pub fn change_percent(&self) -> Decimal {
        self.signed_change_rate.saturating_mul(Decimal::ONE_HUNDRED)
    }

    /// Absolute price change implied by the rate:
    /// `trade_price − trade_price / (1 + rate)`. `None` when the rate is −100%.
    pub fn change_amount(&self) -> Option<Decimal> {
        let previous = self
            .trade_price
            .checked_div(Decimal::ONE.checked_add(self.signed_change_rate)?)?;
        self.trade_price.checked_sub(previous)
    }

    pub fn change(&self) -> Change {
        if self.signed_change_rate > Decimal::ZERO {
            Change::Rise
        } else if self.signed_change_rate < Decimal::ZERO {
            Change::Fall
        } else {
            Change::Even
        }
    }
}

impl MarketScoped for Ticker {
    fn market_code(&self) -> &MarketCode {
        &self.market
    }
}

/// Tickers keyed by market code. A later duplicate replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct TickerBook {
    by_market: HashMap<MarketCode, Ticker>,
}

impl TickerBook {
    pub fn new(tickers: &[Ticker]) -> Self {
        let by_market = tickers
            .iter()
            .map(|t| (t.market.clone(), t.clone()))
            .collect();
        Self { by_market }
    }

    pub fn get(&self, market: &MarketCode) -> Option<&Ticker> {
        self.by_market.get(market)
    }

    /// Last trade price, zero when no ticker exists for the market.
    pub fn price_or_zero(&self, market: &MarketCode) -> Decimal {
        self.get(market)
            .map(|t| t.trade_price)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.by_market.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_market.is_empty()
    }
}
