//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Quote currency of every market the dashboard values holdings in.
pub const KRW: &str = "KRW";

// ─── MarketCode ──────────────────────────────────────────────────────────────

/// Newtype for exchange market codes (e.g. `"KRW-BTC"`): quote currency,
/// dash, base asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarketCode(String);

impl MarketCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The KRW market a held currency is priced in (`"BTC"` → `"KRW-BTC"`).
    pub fn for_currency(currency: &str) -> Self {
        Self(format!("{}-{}", KRW, currency))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Quote currency, the part before the first dash.
    pub fn quote(&self) -> &str {
        self.0.split_once('-').map(|(q, _)| q).unwrap_or(&self.0)
    }

    /// Base asset, the part after the first dash.
    pub fn base(&self) -> &str {
        self.0.split_once('-').map(|(_, b)| b).unwrap_or(&self.0)
    }
}

impl std::fmt::Display for MarketCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MarketCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MarketCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for MarketCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MarketCode(s.to_string()))
    }
}

impl Serialize for MarketCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MarketCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MarketCode(s))
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order side: Bid (buy) or Ask (sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[serde(alias = "buy")]
    Bid,
    #[serde(alias = "sell")]
    Ask,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "Buy"),
            Side::Ask => write!(f, "Sell"),
        }
    }
}

// ─── MinuteUnit ──────────────────────────────────────────────────────────────

/// Minute-candle granularity accepted by the candles endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinuteUnit {
    #[serde(rename = "1")]
    Minute1,
    #[serde(rename = "3")]
    Minute3,
    #[serde(rename = "5")]
    Minute5,
    #[default]
    #[serde(rename = "15")]
    Minute15,
    #[serde(rename = "30")]
    Minute30,
    #[serde(rename = "60")]
    Minute60,
    #[serde(rename = "240")]
    Minute240,
}

impl MinuteUnit {
    pub const ALL: [MinuteUnit; 7] = [
        Self::Minute1,
        Self::Minute3,
        Self::Minute5,
        Self::Minute15,
        Self::Minute30,
        Self::Minute60,
        Self::Minute240,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            Self::Minute1 => 1,
            Self::Minute3 => 3,
            Self::Minute5 => 5,
            Self::Minute15 => 15,
            Self::Minute30 => 30,
            Self::Minute60 => 60,
            Self::Minute240 => 240,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.minutes() == minutes)
    }

    /// Duration of one candle in seconds.
    pub fn seconds(&self) -> u64 {
        self.minutes() as u64 * 60
    }
}

impl std::fmt::Display for MinuteUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

// ─── Decimal parsing ─────────────────────────────────────────────────────────

/// Parse a backend decimal string (`"0.5"`, `"1.2E-7"`).
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Parse a decimal string, treating unparseable input as zero.
///
/// Balances and prices that fail to parse contribute nothing to any sum
/// instead of failing the whole snapshot.
pub fn decimal_or_zero(field: &str, s: &str) -> Decimal {
    match parse_decimal(s) {
        Some(d) => d,
        None => {
            if !s.trim().is_empty() {
                tracing::warn!(field, value = s, "Unparseable decimal, using 0");
            }
            Decimal::ZERO
        }
    }
}

/// Convert a JSON number to `Decimal` via its shortest round-trip form.
pub fn decimal_from_f64(v: f64) -> Decimal {
    if !v.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&v.to_string())
        .ok()
        .or_else(|| Decimal::from_f64_retain(v))
        .unwrap_or_default()
}
