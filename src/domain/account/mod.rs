//! Account domain: holdings per currency and their valuation.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod valuation;
pub mod wire;

use crate::shared::{MarketCode, KRW};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use valuation::{
    cost_basis_value, current_price_for, holding_rows, krw_balance, profit_rate, total_asset_value,
    total_cost_basis, AssetValuation, HoldingRow, PortfolioOverview,
};

/// A holding in one currency (KRW cash or a crypto asset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub currency: String,
    pub balance: Decimal,
    /// Amount tied up in open orders.
    pub locked: Decimal,
    pub avg_buy_price: Decimal,
    pub avg_buy_price_modified: bool,
    pub unit_currency: String,
}

impl Account {
    pub fn is_krw(&self) -> bool {
        self.currency == KRW
    }

    /// The KRW market this holding is priced in.
    pub fn market_code(&self) -> MarketCode {
        MarketCode::for_currency(&self.currency)
    }
}
