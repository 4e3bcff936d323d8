//! Signal domain: externally computed buy/sell/hold evaluations.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::market::MarketScoped;
use crate::shared::MarketCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// History entries requested per market.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

// ─── SignalAction ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
    Other(String),
}

impl SignalAction {
    pub fn as_str(&self) -> &str {
        match self {
            SignalAction::Buy => "buy",
            SignalAction::Sell => "sell",
            SignalAction::Hold => "hold",
            SignalAction::Other(s) => s,
        }
    }
}

impl From<String> for SignalAction {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "buy" => SignalAction::Buy,
            "sell" => SignalAction::Sell,
            "hold" => SignalAction::Hold,
            _ => SignalAction::Other(s),
        }
    }
}

impl From<SignalAction> for String {
    fn from(a: SignalAction) -> Self {
        a.as_str().to_string()
    }
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── SignalLog ───────────────────────────────────────────────────────────────

/// One trading-signal evaluation for a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalLog {
    pub timestamp: DateTime<Utc>,
    pub market: MarketCode,
    pub action: SignalAction,
    /// Decision price, present for buy and sell.
    pub price: Option<Decimal>,
    /// Confidence score, 0 to 100.
    pub score: f64,
    pub reason: String,
}

impl MarketScoped for SignalLog {
    fn market_code(&self) -> &MarketCode {
        &self.market
    }
}

// ─── LatestSignals ───────────────────────────────────────────────────────────

/// Most recent signal per market. Markets without a signal are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatestSignals {
    by_market: BTreeMap<MarketCode, SignalLog>,
}

impl LatestSignals {
    pub fn get(&self, market: &MarketCode) -> Option<&SignalLog> {
        self.by_market.get(market)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MarketCode, &SignalLog)> {
        self.by_market.iter()
    }

    pub fn len(&self) -> usize {
        self.by_market.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_market.is_empty()
    }
}

impl FromIterator<(MarketCode, SignalLog)> for LatestSignals {
    fn from_iter<I: IntoIterator<Item = (MarketCode, SignalLog)>>(iter: I) -> Self {
        Self {
            by_market: iter.into_iter().collect(),
        }
    }
}

// ─── Score chart ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScorePoint {
    pub time: DateTime<Utc>,
    pub score: f64,
}

/// Score over time, oldest first. Input order does not matter.
pub fn score_series(history: &[SignalLog]) -> Vec<ScorePoint> {
    let mut points: Vec<ScorePoint> = history
        .iter()
        .map(|s| ScorePoint {
            time: s.timestamp,
            score: s.score,
        })
        .collect();
    points.sort_by_key(|p| p.time);
    points
}

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    InvalidTimestamp { market: MarketCode, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidTimestamp { market, value } => {
                write!(f, "Signal for {}: invalid timestamp {:?}", market, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
