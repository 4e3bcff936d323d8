//! Conversion: CandleResponse → Candle (TryFrom + validation).

use super::wire::CandleResponse;
use super::{sort_chronological, Candle, ValidationError};
use crate::shared::{decimal_from_f64, MinuteUnit};
use chrono::NaiveDateTime;

fn parse_time(field: &'static str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map_err(|_| {
        ValidationError::InvalidTime {
            field,
            value: value.to_string(),
        }
    })
}

impl TryFrom<CandleResponse> for Candle {
    type Error = ValidationError;

    fn try_from(source: CandleResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            candle_date_time_utc: parse_time("candle_date_time_utc", &source.candle_date_time_utc)?,
            candle_date_time_kst: parse_time("candle_date_time_kst", &source.candle_date_time_kst)?,
            market: source.market,
            opening_price: decimal_from_f64(source.opening_price),
            high_price: decimal_from_f64(source.high_price),
            low_price: decimal_from_f64(source.low_price),
            trade_price: decimal_from_f64(source.trade_price),
            timestamp: source.timestamp,
            candle_acc_trade_price: decimal_from_f64(source.candle_acc_trade_price),
            candle_acc_trade_volume: decimal_from_f64(source.candle_acc_trade_volume),
            unit: source.unit.and_then(MinuteUnit::from_minutes),
        })
    }
}

/// Convert a newest-first candle list into chronological order, dropping
/// bars with unreadable times.
pub(crate) fn candles_from_wire(source: Vec<CandleResponse>) -> Vec<Candle> {
    let mut candles: Vec<Candle> = source
        .into_iter()
        .filter_map(|c| match Candle::try_from(c) {
            Ok(candle) => Some(candle),
            Err(e) => {
                tracing::warn!("Skipping candle: {}", e);
                None
            }
        })
        .collect();
    sort_chronological(&mut candles);
    candles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn bar(utc: &str, close: f64) -> CandleResponse {
        CandleResponse {
            market: "KRW-BTC".into(),
            candle_date_time_utc: utc.to_string(),
            candle_date_time_kst: utc.to_string(),
            opening_price: 100.0,
            high_price: 120.0,
            low_price: 90.0,
            trade_price: close,
            timestamp: 0,
            candle_acc_trade_price: 0.0,
            candle_acc_trade_volume: 0.0,
            unit: Some(15),
        }
    }

    #[test]
    fn test_candle_conversion() {
        let json = r#"{
            "market": "KRW-BTC",
            "candle_date_time_utc": "2024-03-01T00:15:00",
            "candle_date_time_kst": "2024-03-01T09:15:00",
            "opening_price": 60000000.0,
            "high_price": 60500000.0,
            "low_price": 59900000.0,
            "trade_price": 60100000.0,
            "timestamp": 1709252099123,
            "candle_acc_trade_price": 1234567890.12,
            "candle_acc_trade_volume": 20.5,
            "unit": 15
        }"#;
        let wire: CandleResponse = serde_json::from_str(json).unwrap();
        let candle = Candle::try_from(wire).unwrap();
        assert_eq!(candle.unit, Some(MinuteUnit::Minute15));
        assert_eq!(candle.trade_price, Decimal::from(60_100_000));
        assert_eq!(candle.candle_date_time_kst.to_string(), "2024-03-01 09:15:00");
        assert!(candle.is_bullish());
    }

    #[test]
    fn test_newest_first_becomes_chronological() {
        let candles = candles_from_wire(vec![
            bar("2024-03-01T00:30:00", 3.0),
            bar("2024-03-01T00:15:00", 2.0),
            bar("2024-03-01T00:00:00", 1.0),
        ]);
        let closes: Vec<Decimal> = candles.iter().map(|c| c.trade_price).collect();
        assert_eq!(closes, [Decimal::from(1), Decimal::from(2), Decimal::from(3)]);
    }

    #[test]
    fn test_bad_time_is_skipped() {
        let candles = candles_from_wire(vec![
            bar("not a time", 1.0),
            bar("2024-03-01T00:00:00", 2.0),
        ]);
        assert_eq!(candles.len(), 1);
    }
}
