//! Wire types for the signal endpoints.

use crate::shared::MarketCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalLogResponse {
    pub timestamp: String,
    pub market: MarketCode,
    pub action: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reason: String,
}

/// `GET /api/signals/latest`: market code → latest log, `null` when a market
/// has none yet.
pub type LatestSignalsResponse = HashMap<MarketCode, Option<SignalLogResponse>>;
