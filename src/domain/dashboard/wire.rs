//! Wire type for `GET /api/dashboard`.

use crate::domain::account::wire::AccountResponse;
use crate::domain::market::wire::MarketResponse;
use crate::domain::order::wire::OrderHistoryResponse;
use crate::domain::ticker::wire::TickerResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub accounts: Vec<AccountResponse>,
    #[serde(default)]
    pub markets: Vec<MarketResponse>,
    #[serde(default)]
    pub tickers: Vec<TickerResponse>,
    #[serde(default)]
    pub orders: Vec<OrderHistoryResponse>,
}
