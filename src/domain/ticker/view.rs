//! Ticker list view: name enrichment and activity ranking.

use super::Ticker;
use crate::domain::market::{MarketNames, Named};

/// Tickers joined with market names, most traded (24h accumulated trade
/// value) first. Ties keep their input order.
pub fn ticker_rows(tickers: &[Ticker], names: &MarketNames) -> Vec<Named<Ticker>> {
    let mut rows = names.enrich_all(tickers.iter().cloned());
    rows.sort_by(|a, b| b.acc_trade_price_24h.cmp(&a.acc_trade_price_24h));
    rows
}
