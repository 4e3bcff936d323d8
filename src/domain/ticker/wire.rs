//! Wire types for ticker responses (REST).

use crate::shared::MarketCode;
use serde::{Deserialize, Serialize};

/// Raw ticker from `/api/ticker` and the dashboard snapshot. Prices arrive
/// as JSON numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerResponse {
    pub market: MarketCode,
    pub trade_price: f64,
    pub signed_change_rate: f64,
    pub acc_trade_price_24h: f64,
    pub high_price: f64,
    pub low_price: f64,
}
