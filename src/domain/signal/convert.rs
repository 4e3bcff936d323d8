//! Conversion: signal wire types → SignalLog / LatestSignals.

use super::wire::{LatestSignalsResponse, SignalLogResponse};
use super::{LatestSignals, SignalLog, ValidationError};
use crate::shared::decimal_from_f64;
use chrono::{DateTime, NaiveDateTime, Utc};

/// ISO 8601 with an offset, or a naive local string read as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|t| t.and_utc())
        })
}

impl TryFrom<SignalLogResponse> for SignalLog {
    type Error = ValidationError;

    fn try_from(source: SignalLogResponse) -> Result<Self, Self::Error> {
        let Some(timestamp) = parse_timestamp(&source.timestamp) else {
            return Err(ValidationError::InvalidTimestamp {
                market: source.market,
                value: source.timestamp,
            });
        };
        Ok(Self {
            timestamp,
            market: source.market,
            action: source.action.into(),
            price: source.price.map(decimal_from_f64),
            score: source.score,
            reason: source.reason,
        })
    }
}

fn keep_valid(source: SignalLogResponse) -> Option<SignalLog> {
    match SignalLog::try_from(source) {
        Ok(log) => Some(log),
        Err(e) => {
            tracing::warn!("Skipping signal entry: {}", e);
            None
        }
    }
}

pub(crate) fn history_from_wire(source: Vec<SignalLogResponse>) -> Vec<SignalLog> {
    source.into_iter().filter_map(keep_valid).collect()
}

impl From<LatestSignalsResponse> for LatestSignals {
    fn from(source: LatestSignalsResponse) -> Self {
        source
            .into_iter()
            .filter_map(|(market, log)| Some((market, keep_valid(log?)?)))
            .collect()
    }
}
