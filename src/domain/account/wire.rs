//! Wire types for account responses (REST).

use serde::{Deserialize, Serialize};

/// Raw account entry. Numeric fields are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountResponse {
    pub currency: String,
    pub balance: String,
    pub locked: String,
    pub avg_buy_price: String,
    #[serde(default)]
    pub avg_buy_price_modified: bool,
    #[serde(default)]
    pub unit_currency: String,
}
