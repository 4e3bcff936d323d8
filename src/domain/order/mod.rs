//! Order domain: closed-order history and its trade views.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod view;
pub mod wire;

use crate::domain::market::MarketScoped;
use crate::shared::{MarketCode, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) use convert::orders_from_wire;
pub use view::{
    fill_markers, order_rows, recent_trades, sort_newest_first, trade_history, FillMarker,
    RECENT_TRADES_LIMIT,
};

// ─── OrderType ───────────────────────────────────────────────────────────────

/// How the order was priced. Unknown codes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    Limit,
    /// Market buy by total KRW amount.
    Price,
    /// Market sell by volume.
    Market,
    Best,
    Other(String),
}

impl OrderType {
    pub fn as_str(&self) -> &str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Price => "price",
            OrderType::Market => "market",
            OrderType::Best => "best",
            OrderType::Other(s) => s,
        }
    }
}

impl From<String> for OrderType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "limit" => OrderType::Limit,
            "price" => OrderType::Price,
            "market" => OrderType::Market,
            "best" => OrderType::Best,
            _ => OrderType::Other(s),
        }
    }
}

impl From<OrderType> for String {
    fn from(t: OrderType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "Limit"),
            OrderType::Price => write!(f, "Market Buy"),
            OrderType::Market => write!(f, "Market Sell"),
            OrderType::Best => write!(f, "Best"),
            OrderType::Other(s) => write!(f, "{}", s),
        }
    }
}

// ─── OrderState ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderState {
    Wait,
    Watch,
    Done,
    Cancel,
    Other(String),
}

impl OrderState {
    pub fn as_str(&self) -> &str {
        match self {
            OrderState::Wait => "wait",
            OrderState::Watch => "watch",
            OrderState::Done => "done",
            OrderState::Cancel => "cancel",
            OrderState::Other(s) => s,
        }
    }
}

impl From<String> for OrderState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "wait" => OrderState::Wait,
            "watch" => OrderState::Watch,
            "done" => OrderState::Done,
            "cancel" => OrderState::Cancel,
            _ => OrderState::Other(s),
        }
    }
}

impl From<OrderState> for String {
    fn from(s: OrderState) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── OrderHistory ────────────────────────────────────────────────────────────

/// One historical order as reported by the closed-orders endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    pub id: String,
    pub side: Side,
    pub order_type: OrderType,
    /// Absent for market sells.
    pub price: Option<Decimal>,
    pub state: OrderState,
    pub market: MarketCode,
    pub created_at: DateTime<Utc>,
    /// Absent for market buys, which are sized by KRW amount.
    pub volume: Option<Decimal>,
    pub remaining_volume: Decimal,
    pub executed_volume: Decimal,
    pub executed_funds: Decimal,
    pub paid_fee: Decimal,
}

impl OrderHistory {
    /// True once any part of the order has filled.
    pub fn is_executed(&self) -> bool {
        self.executed_volume > Decimal::ZERO
    }

    /// `executed_funds / executed_volume`. `None` for unfilled orders.
    pub fn average_execution_price(&self) -> Option<Decimal> {
        if !self.is_executed() {
            return None;
        }
        self.executed_funds.checked_div(self.executed_volume)
    }

    /// KRW value filled so far. Falls back to `price × executed_volume` when
    /// the backend reports no executed funds.
    pub fn executed_amount(&self) -> Decimal {
        if self.executed_funds > Decimal::ZERO {
            self.executed_funds
        } else {
            self.price
                .unwrap_or(Decimal::ZERO)
                .saturating_mul(self.executed_volume)
        }
    }
}

impl MarketScoped for OrderHistory {
    fn market_code(&self) -> &MarketCode {
        &self.market
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    IdMissing,
    InvalidTimestamp { id: String, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::IdMissing => write!(f, "Missing order id"),
            ValidationError::InvalidTimestamp { id, value } => {
                write!(f, "Order {}: invalid created_at {:?}", id, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
