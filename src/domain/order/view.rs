//! Order list views: newest-first tables, trade history, chart fill markers.

use super::OrderHistory;
use crate::domain::market::{MarketNames, Named};
use crate::shared::fmt::decimal::grouped;
use crate::shared::{MarketCode, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Rows shown in the dashboard's recent-trades panel.
pub const RECENT_TRADES_LIMIT: usize = 10;

/// Stable sort, most recent `created_at` first.
pub fn sort_newest_first(orders: &mut [OrderHistory]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Every order, unfilled ones included, joined with market names and sorted
/// newest first.
pub fn order_rows(orders: &[OrderHistory], names: &MarketNames) -> Vec<Named<OrderHistory>> {
    let mut sorted = orders.to_vec();
    sort_newest_first(&mut sorted);
    names.enrich_all(sorted)
}

/// Executed orders only, joined with market names, newest first.
pub fn trade_history(orders: &[OrderHistory], names: &MarketNames) -> Vec<Named<OrderHistory>> {
    let mut executed: Vec<OrderHistory> =
        orders.iter().filter(|o| o.is_executed()).cloned().collect();
    sort_newest_first(&mut executed);
    names.enrich_all(executed)
}

/// The first `limit` rows of [`trade_history`].
pub fn recent_trades(
    orders: &[OrderHistory],
    names: &MarketNames,
    limit: usize,
) -> Vec<Named<OrderHistory>> {
    let mut rows = trade_history(orders, names);
    rows.truncate(limit);
    rows
}

/// A fill drawn on the price chart at its average execution price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillMarker {
    pub id: String,
    pub market: MarketCode,
    pub time: DateTime<Utc>,
    pub price: Decimal,
    pub side: Side,
}

impl FillMarker {
    /// Annotation text, e.g. `"Buy @ 60,100,000"`.
    pub fn label(&self) -> String {
        format!("{} @ {}", self.side, grouped(&self.price, 3))
    }
}

/// Chart markers for executed orders, in input order.
pub fn fill_markers(orders: &[OrderHistory]) -> Vec<FillMarker> {
    orders
        .iter()
        .filter_map(|o| {
            let price = o.average_execution_price()?;
            Some(FillMarker {
                id: o.id.clone(),
                market: o.market.clone(),
                time: o.created_at,
                price,
                side: o.side,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::{filter_by_search, Market};
    use crate::domain::order::test_support::order;

    fn names() -> MarketNames {
        MarketNames::new(&[Market {
            market_code: MarketCode::from("KRW-BTC"),
            korean_name: "비트코인".to_string(),
            english_name: "Bitcoin".to_string(),
            market_warning: None,
        }])
    }

    fn ids<T: std::ops::Deref<Target = OrderHistory>>(rows: &[T]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_sort_is_newest_first_and_stable() {
        let mut orders = vec![
            order("old", "KRW-BTC", 1, 1, 100),
            order("tie-a", "KRW-BTC", 5, 1, 100),
            order("new", "KRW-BTC", 9, 1, 100),
            order("tie-b", "KRW-BTC", 5, 1, 100),
        ];
        sort_newest_first(&mut orders);
        let got: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(got, ["new", "tie-a", "tie-b", "old"]);
        assert!(orders.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_order_rows_keep_unfilled_orders() {
        let orders = vec![
            order("filled", "KRW-BTC", 1, 2, 100),
            order("open", "KRW-XRP", 2, 0, 0),
        ];
        let rows = order_rows(&orders, &names());
        assert_eq!(ids(&rows), ["open", "filled"]);
        assert_eq!(rows[0].market_name, "KRW-XRP");
        assert_eq!(rows[1].market_name, "비트코인");
    }

    #[test]
    fn test_trade_history_excludes_unfilled() {
        let orders = vec![
            order("a", "KRW-BTC", 1, 2, 100),
            order("b", "KRW-BTC", 2, 0, 0),
            order("c", "KRW-BTC", 3, 1, 50),
        ];
        let rows = trade_history(&orders, &names());
        assert_eq!(ids(&rows), ["c", "a"]);
    }

    #[test]
    fn test_recent_trades_limit() {
        let orders: Vec<OrderHistory> = (0..15)
            .map(|m| order(&format!("o{m}"), "KRW-BTC", m, 1, 100))
            .collect();
        let rows = recent_trades(&orders, &names(), RECENT_TRADES_LIMIT);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].id, "o14");
    }

    #[test]
    fn test_search_on_empty_term_keeps_sorted_rows() {
        let orders = vec![
            order("a", "KRW-BTC", 1, 1, 100),
            order("b", "KRW-ETH", 2, 1, 100),
        ];
        let rows = order_rows(&orders, &names());
        assert_eq!(filter_by_search(&rows, ""), rows);
        assert_eq!(ids(&filter_by_search(&rows, "비트")), ["a"]);
        assert_eq!(ids(&filter_by_search(&rows, "eth")), ["b"]);
    }

    #[test]
    fn test_fill_markers_skip_unfilled() {
        let orders = vec![order("a", "KRW-BTC", 1, 4, 2000), order("b", "KRW-BTC", 2, 0, 0)];
        let markers = fill_markers(&orders);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].price, Decimal::from(500));
        assert_eq!(markers[0].side, Side::Bid);
        assert_eq!(markers[0].label(), "Buy @ 500");
    }
}
