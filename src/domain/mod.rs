//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods (and caching where useful)
//!
//! Pure calculators sit beside them (`account/valuation.rs`, `order/view.rs`,
//! `ticker/view.rs`, `market/names.rs`).

pub mod account;
pub mod candle;
pub mod dashboard;
pub mod market;
pub mod order;
pub mod signal;
pub mod ticker;
