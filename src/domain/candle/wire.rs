//! Wire types for the minute-candles endpoint.

use crate::shared::MarketCode;
use serde::{Deserialize, Serialize};

/// Candle as sent by `GET /api/candles/minutes/{unit}`. Prices are JSON
/// numbers; times are local ISO strings without an offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandleResponse {
    pub market: MarketCode,
    pub candle_date_time_utc: String,
    pub candle_date_time_kst: String,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub trade_price: f64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub candle_acc_trade_price: f64,
    #[serde(default)]
    pub candle_acc_trade_volume: f64,
    #[serde(default)]
    pub unit: Option<u32>,
}
