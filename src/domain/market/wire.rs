//! Wire types for market responses (REST).

use crate::shared::MarketCode;
use serde::{Deserialize, Serialize};

/// Raw market entry from `/api/markets` and the dashboard snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketResponse {
    pub market: MarketCode,
    pub korean_name: String,
    pub english_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_warning: Option<String>,
}
