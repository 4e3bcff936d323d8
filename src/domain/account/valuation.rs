//! Portfolio valuation over one account/ticker snapshot.
//!
//! Two totals live here and they answer different questions:
//!
//! - [`total_asset_value`] / [`PortfolioOverview`]: KRW cash plus every crypto
//!   holding at its **current market price**.
//! - [`total_cost_basis`] / [`holding_rows`]: KRW cash plus every crypto
//!   holding at its **average buy price**.
//!
//! They diverge whenever prices have moved since purchase. Callers pick the
//! one they mean; neither is derived from the other.

use super::Account;
use crate::domain::ticker::{Ticker, TickerBook};
use crate::shared::fmt::decimal::{krw, signed_percent, volume};
use crate::shared::{MarketCode, KRW};
use rust_decimal::Decimal;
use serde::Serialize;

/// `(current − avg) / avg × 100`. Zero when `avg_buy_price ≤ 0`.
pub fn profit_rate(current_price: Decimal, avg_buy_price: Decimal) -> Decimal {
    if avg_buy_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    current_price
        .checked_sub(avg_buy_price)
        .and_then(|diff| diff.checked_div(avg_buy_price))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Current price of the KRW market a currency trades in, zero without a ticker.
pub fn current_price_for(currency: &str, book: &TickerBook) -> Decimal {
    book.price_or_zero(&MarketCode::for_currency(currency))
}

/// Balance of the first KRW account, zero when there is none.
pub fn krw_balance(accounts: &[Account]) -> Decimal {
    accounts
        .iter()
        .find(|a| a.is_krw())
        .map(|a| a.balance)
        .unwrap_or(Decimal::ZERO)
}

/// KRW balance plus each crypto balance at its current ticker price.
/// Holdings without a ticker contribute zero.
pub fn total_asset_value(accounts: &[Account], tickers: &[Ticker]) -> Decimal {
    PortfolioOverview::compute(accounts, tickers).total_asset_value
}

// ─── Current-price valuation ────────────────────────────────────────────────

/// One crypto holding valued at the current market price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetValuation {
    pub currency: String,
    pub market: MarketCode,
    pub balance: Decimal,
    pub avg_buy_price: Decimal,
    pub current_price: Decimal,
    pub current_value: Decimal,
    pub profit_rate: Decimal,
}

impl AssetValuation {
    pub fn new(account: &Account, current_price: Decimal) -> Self {
        Self {
            currency: account.currency.clone(),
            market: account.market_code(),
            balance: account.balance,
            avg_buy_price: account.avg_buy_price,
            current_price,
            current_value: current_price.saturating_mul(account.balance),
            profit_rate: profit_rate(current_price, account.avg_buy_price),
        }
    }

    /// `"+20.00%"` style profit rate.
    pub fn profit_rate_label(&self) -> String {
        signed_percent(&self.profit_rate)
    }

    /// Unrealized gain in KRW against the cost basis.
    pub fn unrealized_pnl(&self) -> Decimal {
        self.current_value
            .saturating_sub(self.avg_buy_price.saturating_mul(self.balance))
    }
}

/// Current-price overview of the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioOverview {
    /// Crypto holdings in account order.
    pub assets: Vec<AssetValuation>,
    pub krw_balance: Decimal,
    pub total_asset_value: Decimal,
}

impl PortfolioOverview {
    pub fn compute(accounts: &[Account], tickers: &[Ticker]) -> Self {
        let book = TickerBook::new(tickers);
        let assets: Vec<AssetValuation> = accounts
            .iter()
            .filter(|a| !a.is_krw())
            .map(|a| AssetValuation::new(a, current_price_for(&a.currency, &book)))
            .collect();
        let krw_balance = krw_balance(accounts);
        let total_asset_value = assets
            .iter()
            .fold(krw_balance, |total, asset| total.saturating_add(asset.current_value));

        Self {
            assets,
            krw_balance,
            total_asset_value,
        }
    }

    /// Allocation slices for the asset chart: each crypto holding in
    /// account order, then KRW last.
    pub fn allocation(&self) -> Vec<(String, Decimal)> {
        self.assets
            .iter()
            .map(|a| (a.currency.clone(), a.current_value))
            .chain(std::iter::once((KRW.to_string(), self.krw_balance)))
            .collect()
    }

    /// Share of the total per allocation slice, in percent. Empty when the
    /// total is zero.
    pub fn allocation_percent(&self) -> Vec<(String, Decimal)> {
        if self.total_asset_value.is_zero() {
            return Vec::new();
        }
        self.allocation()
            .into_iter()
            .map(|(label, value)| {
                let pct = value
                    .checked_div(self.total_asset_value)
                    .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
                    .unwrap_or(Decimal::ZERO);
                (label, pct)
            })
            .collect()
    }
}

// ─── Cost-basis valuation ───────────────────────────────────────────────────

/// KRW accounts at face balance; crypto at `balance × avg_buy_price`.
/// Saturates at `Decimal::MAX` rather than overflowing.
pub fn cost_basis_value(account: &Account) -> Decimal {
    if account.is_krw() {
        account.balance
    } else {
        account.balance.saturating_mul(account.avg_buy_price)
    }
}

/// Sum of [`cost_basis_value`] over all accounts.
pub fn total_cost_basis(accounts: &[Account]) -> Decimal {
    accounts
        .iter()
        .map(cost_basis_value)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Row of the detailed asset table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingRow {
    pub currency: String,
    pub unit_currency: Option<String>,
    pub balance: Decimal,
    pub locked: Decimal,
    /// `None` for KRW, which has no buy price.
    pub avg_buy_price: Option<Decimal>,
    pub cost_basis_value: Decimal,
}

impl HoldingRow {
    /// Balance with eight decimals, whole won for KRW.
    pub fn balance_label(&self) -> String {
        if self.avg_buy_price.is_none() {
            krw(&self.balance)
        } else {
            volume(&self.balance, 8)
        }
    }

    /// Average buy price for the table, `"-"` for KRW.
    pub fn avg_buy_price_label(&self) -> String {
        self.avg_buy_price
            .map(|p| krw(&p))
            .unwrap_or_else(|| "-".to_string())
    }
}

pub fn holding_rows(accounts: &[Account]) -> Vec<HoldingRow> {
    accounts
        .iter()
        .map(|a| HoldingRow {
            currency: a.currency.clone(),
            unit_currency: Some(a.unit_currency.clone()).filter(|u| !u.is_empty()),
            balance: a.balance,
            locked: a.locked,
            avg_buy_price: (!a.is_krw()).then_some(a.avg_buy_price),
            cost_basis_value: cost_basis_value(a),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn account(currency: &str, balance: &str, avg: &str) -> Account {
        Account {
            currency: currency.to_string(),
            balance: d(balance),
            locked: Decimal::ZERO,
            avg_buy_price: d(avg),
            avg_buy_price_modified: false,
            unit_currency: "KRW".to_string(),
        }
    }

    fn ticker(market: &str, price: &str) -> Ticker {
        Ticker {
            market: MarketCode::from(market),
            trade_price: d(price),
            signed_change_rate: Decimal::ZERO,
            acc_trade_price_24h: Decimal::ZERO,
            high_price: Decimal::ZERO,
            low_price: Decimal::ZERO,
        }
    }

    #[test]
    fn test_profit_rate_zero_avg_is_zero() {
        assert_eq!(profit_rate(d("123"), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(profit_rate(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_profit_rate_negative_avg_is_zero() {
        assert_eq!(profit_rate(d("100"), d("-5")), Decimal::ZERO);
    }

    #[test]
    fn test_profit_rate_unchanged_price_is_zero() {
        assert_eq!(profit_rate(d("50000000"), d("50000000")), Decimal::ZERO);
    }

    #[test]
    fn test_profit_rate_loss() {
        assert_eq!(profit_rate(d("40"), d("50")), d("-20"));
    }

    #[test]
    fn test_btc_scenario() {
        let accounts = vec![account("BTC", "1.0", "50000000")];
        let tickers = vec![ticker("KRW-BTC", "60000000")];
        let overview = PortfolioOverview::compute(&accounts, &tickers);

        let btc = &overview.assets[0];
        assert_eq!(btc.profit_rate, d("20"));
        assert_eq!(btc.current_value, d("60000000"));
        assert_eq!(btc.unrealized_pnl(), d("10000000"));
        assert_eq!(btc.profit_rate_label(), "+20.00%");
        assert_eq!(overview.total_asset_value, d("60000000"));
    }

    #[test]
    fn test_missing_ticker_contributes_zero() {
        let accounts = vec![account("KRW", "1000", "0"), account("DOGE", "500", "100")];
        let overview = PortfolioOverview::compute(&accounts, &[]);
        assert_eq!(overview.assets[0].current_price, Decimal::ZERO);
        assert_eq!(overview.assets[0].current_value, Decimal::ZERO);
        assert_eq!(overview.total_asset_value, d("1000"));
    }

    #[test]
    fn test_total_at_least_krw_balance() {
        let accounts = vec![
            account("KRW", "250000", "0"),
            account("BTC", "0.01", "50000000"),
            account("ETH", "2", "3000000"),
            account("XRP", "0", "700"),
        ];
        let tickers = vec![ticker("KRW-BTC", "0"), ticker("KRW-ETH", "2500000")];
        let total = total_asset_value(&accounts, &tickers);
        assert!(total >= krw_balance(&accounts));
        assert_eq!(total, d("5250000"));
    }

    #[test]
    fn test_no_krw_account() {
        let accounts = vec![account("ETH", "1", "1")];
        assert_eq!(krw_balance(&accounts), Decimal::ZERO);
        assert_eq!(
            total_asset_value(&accounts, &[ticker("KRW-ETH", "10")]),
            d("10")
        );
    }

    #[test]
    fn test_allocation_puts_krw_last() {
        let accounts = vec![
            account("KRW", "500", "0"),
            account("BTC", "1", "100"),
            account("ETH", "1", "100"),
        ];
        let tickers = vec![ticker("KRW-BTC", "300"), ticker("KRW-ETH", "200")];
        let overview = PortfolioOverview::compute(&accounts, &tickers);
        let labels: Vec<_> = overview.allocation().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["BTC", "ETH", "KRW"]);

        let pct = overview.allocation_percent();
        assert_eq!(pct[0].1, d("30"));
        assert_eq!(pct[2].1, d("50"));
    }

    #[test]
    fn test_allocation_percent_empty_portfolio() {
        let overview = PortfolioOverview::compute(&[], &[]);
        assert!(overview.allocation_percent().is_empty());
        assert_eq!(overview.allocation().len(), 1);
    }

    #[test]
    fn test_cost_basis_differs_from_current_value() {
        let accounts = vec![account("KRW", "1000", "0"), account("BTC", "1.0", "50000000")];
        let tickers = vec![ticker("KRW-BTC", "60000000")];
        assert_eq!(total_cost_basis(&accounts), d("50001000"));
        assert_eq!(total_asset_value(&accounts, &tickers), d("60001000"));
    }

    #[test]
    fn test_cost_basis_ignores_avg_price_for_krw() {
        let krw = account("KRW", "1000", "999");
        assert_eq!(cost_basis_value(&krw), d("1000"));
    }

    #[test]
    fn test_holding_rows() {
        let mut krw = account("KRW", "1000", "0");
        krw.unit_currency = String::new();
        let rows = holding_rows(&[krw, account("BTC", "0.5", "40000000")]);
        assert_eq!(rows[0].avg_buy_price, None);
        assert_eq!(rows[0].unit_currency, None);
        assert_eq!(rows[0].cost_basis_value, d("1000"));
        assert_eq!(rows[1].avg_buy_price, Some(d("40000000")));
        assert_eq!(rows[1].cost_basis_value, d("20000000"));
        assert_eq!(rows[0].avg_buy_price_label(), "-");
        assert_eq!(rows[1].avg_buy_price_label(), "₩40,000,000");
        assert_eq!(rows[0].balance_label(), "₩1,000");
        assert_eq!(rows[1].balance_label(), "0.50000000");
    }

    #[test]
    fn test_huge_balances_saturate_instead_of_overflowing() {
        let whale = account("BTC", "1000000000000000000000", "1");
        let overview = PortfolioOverview::compute(&[whale], &[ticker("KRW-BTC", "100000000")]);
        assert_eq!(overview.assets[0].current_value, Decimal::MAX);
        assert_eq!(overview.total_asset_value, Decimal::MAX);
        assert_eq!(overview.allocation_percent()[0].1, Decimal::ONE_HUNDRED);

        let big = account("ETH", "1000000000000000", "1000000000000000");
        assert_eq!(cost_basis_value(&big), Decimal::MAX);
        assert_eq!(
            total_cost_basis(&[account("KRW", "1000", "0"), big]),
            Decimal::MAX
        );
    }
}
