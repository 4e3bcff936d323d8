//! Wire types for the closed-orders endpoint.

use crate::shared::{MarketCode, Side};
use serde::{Deserialize, Serialize};

/// Closed order as sent by `GET /api/orders/closed`. Quantities are decimal
/// strings; `price` and `volume` are null for market orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistoryResponse {
    pub uuid: String,
    pub side: Side,
    pub ord_type: String,
    #[serde(default)]
    pub price: Option<String>,
    pub state: String,
    pub market: MarketCode,
    pub created_at: String,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub remaining_volume: Option<String>,
    #[serde(default)]
    pub reserved_fee: Option<String>,
    #[serde(default)]
    pub remaining_fee: Option<String>,
    #[serde(default)]
    pub paid_fee: Option<String>,
    #[serde(default)]
    pub locked: Option<String>,
    #[serde(default)]
    pub executed_volume: Option<String>,
    #[serde(default)]
    pub executed_funds: Option<String>,
}
