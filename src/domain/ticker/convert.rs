//! Conversion: TickerResponse → Ticker.

use super::wire::TickerResponse;
use super::Ticker;
use crate::shared::decimal_from_f64;

impl From<TickerResponse> for Ticker {
    fn from(t: TickerResponse) -> Self {
        Self {
            market: t.market,
            trade_price: decimal_from_f64(t.trade_price),
            signed_change_rate: decimal_from_f64(t.signed_change_rate),
            acc_trade_price_24h: decimal_from_f64(t.acc_trade_price_24h),
            high_price: decimal_from_f64(t.high_price),
            low_price: decimal_from_f64(t.low_price),
        }
    }
}
