//! Composite views: every derived figure a screen shows, recomputed from
//! whatever snapshot each source currently holds.
//!
//! Sources update independently, so a view may combine a newer ticker with
//! older orders. Views never assume the inputs are from the same moment.

use crate::domain::account::{holding_rows, total_cost_basis, HoldingRow, PortfolioOverview};
use crate::domain::candle::Candle;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::market::{filter_by_search, Market, MarketNames, Named};
use crate::domain::order::{
    fill_markers, order_rows, recent_trades, trade_history, FillMarker, OrderHistory,
    RECENT_TRADES_LIMIT,
};
use crate::domain::signal::{score_series, LatestSignals, ScorePoint, SignalLog};
use crate::domain::ticker::{ticker_rows, Ticker};
use crate::shared::MarketCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Fills listed on the market detail screen.
pub const RECENT_FILLS_LIMIT: usize = 20;

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub timestamp: Option<DateTime<Utc>>,
    /// Current-price valuation (asset chart, total asset value).
    pub portfolio: PortfolioOverview,
    /// Average-cost valuation (detailed asset table).
    pub holdings: Vec<HoldingRow>,
    /// Sum of `holdings`. Not comparable with `portfolio.total_asset_value`.
    pub total_cost_basis: Decimal,
    /// Most traded first.
    pub tickers: Vec<Named<Ticker>>,
    /// All orders, newest first.
    pub orders: Vec<Named<OrderHistory>>,
    /// Executed orders, newest first.
    pub trades: Vec<Named<OrderHistory>>,
    pub recent_trades: Vec<Named<OrderHistory>>,
    /// Latest signal per market, in market-code order.
    pub signals: Vec<Named<SignalLog>>,
}

impl DashboardView {
    pub fn compute(snapshot: &DashboardSnapshot, latest_signals: &LatestSignals) -> Self {
        let names = snapshot.market_names();
        Self {
            timestamp: snapshot.timestamp,
            portfolio: snapshot.portfolio(),
            holdings: holding_rows(&snapshot.accounts),
            total_cost_basis: total_cost_basis(&snapshot.accounts),
            tickers: ticker_rows(&snapshot.tickers, &names),
            orders: order_rows(&snapshot.orders, &names),
            trades: trade_history(&snapshot.orders, &names),
            recent_trades: recent_trades(&snapshot.orders, &names, RECENT_TRADES_LIMIT),
            signals: names.enrich_all(latest_signals.iter().map(|(_, s)| s.clone())),
        }
    }

    pub fn search_tickers(&self, term: &str) -> Vec<Named<Ticker>> {
        filter_by_search(&self.tickers, term)
    }

    pub fn search_orders(&self, term: &str) -> Vec<Named<OrderHistory>> {
        filter_by_search(&self.orders, term)
    }
}

// ─── Market detail ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketDetailView {
    pub market: MarketCode,
    pub display_name: String,
    pub english_name: Option<String>,
    pub ticker: Option<Ticker>,
    /// `None` without a ticker, or when the change rate is −100%.
    pub change_amount: Option<Decimal>,
    /// Oldest first.
    pub candles: Vec<Candle>,
    pub fill_markers: Vec<FillMarker>,
    /// Executed orders, newest first, at most [`RECENT_FILLS_LIMIT`].
    pub recent_fills: Vec<OrderHistory>,
    /// Oldest first.
    pub score_series: Vec<ScorePoint>,
    /// As returned by the backend, newest first.
    pub signal_history: Vec<SignalLog>,
}

impl MarketDetailView {
    pub fn compute(
        code: &MarketCode,
        market: Option<&Market>,
        ticker: Option<&Ticker>,
        candles: &[Candle],
        orders: &[OrderHistory],
        signal_history: &[SignalLog],
    ) -> Self {
        let names = MarketNames::new(market.map(std::slice::from_ref).unwrap_or_default());
        let mut recent_fills: Vec<OrderHistory> = trade_history(orders, &names)
            .into_iter()
            .map(Named::into_inner)
            .collect();
        recent_fills.truncate(RECENT_FILLS_LIMIT);

        Self {
            market: code.clone(),
            display_name: names.name_for(code).to_string(),
            english_name: market
                .map(|m| m.english_name.clone())
                .filter(|n| !n.is_empty()),
            ticker: ticker.cloned(),
            change_amount: ticker.and_then(Ticker::change_amount),
            candles: candles.to_vec(),
            fill_markers: fill_markers(orders),
            recent_fills,
            score_series: score_series(signal_history),
            signal_history: signal_history.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Account;
    use crate::domain::order::{OrderState, OrderType};
    use crate::domain::signal::SignalAction;
    use crate::shared::Side;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn btc_market() -> Market {
        Market {
            market_code: MarketCode::from("KRW-BTC"),
            korean_name: "비트코인".to_string(),
            english_name: "Bitcoin".to_string(),
            market_warning: None,
        }
    }

    fn ticker(market: &str, price: &str, acc: &str) -> Ticker {
        Ticker {
            market: MarketCode::from(market),
            trade_price: d(price),
            signed_change_rate: d("0.1"),
            acc_trade_price_24h: d(acc),
            high_price: Decimal::ZERO,
            low_price: Decimal::ZERO,
        }
    }

    fn order(id: &str, minute: u32, executed: &str, funds: &str) -> OrderHistory {
        OrderHistory {
            id: id.to_string(),
            side: Side::Ask,
            order_type: OrderType::Market,
            price: None,
            state: OrderState::Done,
            market: MarketCode::from("KRW-BTC"),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, minute, 0).unwrap(),
            volume: Some(d(executed)),
            remaining_volume: Decimal::ZERO,
            executed_volume: d(executed),
            executed_funds: d(funds),
            paid_fee: Decimal::ZERO,
        }
    }

    fn signal(market: &str, minute: u32, score: f64) -> SignalLog {
        SignalLog {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 0, minute, 0).unwrap(),
            market: MarketCode::from(market),
            action: SignalAction::Hold,
            price: None,
            score,
            reason: "flat".to_string(),
        }
    }

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            timestamp: None,
            accounts: vec![
                Account {
                    currency: "KRW".to_string(),
                    balance: d("1000"),
                    locked: Decimal::ZERO,
                    avg_buy_price: Decimal::ZERO,
                    avg_buy_price_modified: false,
                    unit_currency: "KRW".to_string(),
                },
                Account {
                    currency: "BTC".to_string(),
                    balance: d("1.0"),
                    locked: Decimal::ZERO,
                    avg_buy_price: d("50000000"),
                    avg_buy_price_modified: false,
                    unit_currency: "KRW".to_string(),
                },
            ],
            markets: vec![btc_market()],
            tickers: vec![
                ticker("KRW-ETH", "3000000", "10"),
                ticker("KRW-BTC", "60000000", "99"),
            ],
            orders: vec![order("a", 1, "0.1", "6000000"), order("b", 2, "0", "0")],
        }
    }

    #[test]
    fn test_dashboard_view_keeps_both_totals() {
        let view = DashboardView::compute(&snapshot(), &LatestSignals::default());
        assert_eq!(view.portfolio.total_asset_value, d("60001000"));
        assert_eq!(view.total_cost_basis, d("50001000"));
        assert_eq!(view.holdings[0].avg_buy_price, None);
    }

    #[test]
    fn test_dashboard_view_rows() {
        let latest: LatestSignals = vec![(MarketCode::from("KRW-BTC"), signal("KRW-BTC", 0, 70.0))]
            .into_iter()
            .collect();
        let view = DashboardView::compute(&snapshot(), &latest);

        assert_eq!(view.tickers[0].market_name, "비트코인");
        assert_eq!(view.tickers[1].market_name, "KRW-ETH");
        assert_eq!(view.orders.len(), 2);
        assert_eq!(view.orders[0].id, "b");
        assert_eq!(view.trades.len(), 1);
        assert_eq!(view.recent_trades.len(), 1);
        assert_eq!(view.signals[0].market_name, "비트코인");
        assert_eq!(view.search_tickers("bit").len(), 1);
        assert_eq!(view.search_tickers("").len(), 2);
        assert_eq!(view.search_orders("eth").len(), 0);
    }

    #[test]
    fn test_dashboard_view_without_signals() {
        let view = DashboardView::compute(&DashboardSnapshot::default(), &LatestSignals::default());
        assert!(view.signals.is_empty());
        assert_eq!(view.portfolio.total_asset_value, Decimal::ZERO);
    }

    #[test]
    fn test_market_detail_view() {
        let code = MarketCode::from("KRW-BTC");
        let market = btc_market();
        let t = ticker("KRW-BTC", "110", "1");
        let orders = vec![order("a", 1, "0.5", "50"), order("b", 2, "0", "0")];
        let history = vec![signal("KRW-BTC", 9, 80.0), signal("KRW-BTC", 3, 20.0)];

        let view =
            MarketDetailView::compute(&code, Some(&market), Some(&t), &[], &orders, &history);
        assert_eq!(view.display_name, "비트코인");
        assert_eq!(view.english_name.as_deref(), Some("Bitcoin"));
        assert_eq!(view.change_amount, Some(d("10")));
        assert_eq!(view.fill_markers.len(), 1);
        assert_eq!(view.fill_markers[0].price, d("100"));
        assert_eq!(view.recent_fills.len(), 1);
        assert_eq!(view.score_series[0].score, 20.0);
        assert_eq!(view.signal_history[0].score, 80.0);
    }

    #[test]
    fn test_market_detail_view_before_data_arrives() {
        let code = MarketCode::from("KRW-DOGE");
        let view = MarketDetailView::compute(&code, None, None, &[], &[], &[]);
        assert_eq!(view.display_name, "KRW-DOGE");
        assert_eq!(view.change_amount, None);
        assert!(view.recent_fills.is_empty());
    }
}
