//! Candle domain: minute OHLC bars for the price chart.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::market::MarketScoped;
use crate::shared::{MarketCode, MinuteUnit};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bars requested per chart load.
pub const DEFAULT_CANDLE_COUNT: u32 = 100;

/// One minute candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub market: MarketCode,
    pub candle_date_time_utc: NaiveDateTime,
    /// Bar start in exchange-local time (UTC+9); the chart's x axis.
    pub candle_date_time_kst: NaiveDateTime,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub trade_price: Decimal,
    /// Last trade time in the bar, milliseconds since the epoch.
    pub timestamp: i64,
    pub candle_acc_trade_price: Decimal,
    pub candle_acc_trade_volume: Decimal,
    pub unit: Option<MinuteUnit>,
}

impl Candle {
    /// `[open, high, low, close]`, the tuple candlestick series take.
    pub fn ohlc(&self) -> [Decimal; 4] {
        [
            self.opening_price,
            self.high_price,
            self.low_price,
            self.trade_price,
        ]
    }

    pub fn is_bullish(&self) -> bool {
        self.trade_price >= self.opening_price
    }
}

impl MarketScoped for Candle {
    fn market_code(&self) -> &MarketCode {
        &self.market
    }
}

/// Stable sort, oldest bar first.
pub fn sort_chronological(candles: &mut [Candle]) {
    candles.sort_by_key(|c| c.candle_date_time_utc);
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    InvalidTime { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidTime { field, value } => {
                write!(f, "Invalid candle {}: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
