//! Ready-made scopes for the two polled screens.

use super::{Feed, LoadState, OnFailure, PollHandle, PollScope};
use crate::client::DashboardClient;
use crate::domain::candle::Candle;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::market::Market;
use crate::domain::order::OrderHistory;
use crate::domain::signal::{LatestSignals, SignalLog};
use crate::domain::ticker::Ticker;
use crate::shared::{MarketCode, MinuteUnit};
use crate::view::{DashboardView, MarketDetailView};

/// Feeds of the dashboard scope. Polling stops when this is dropped.
pub struct DashboardFeeds {
    pub handle: PollHandle,
    pub snapshot: Feed<DashboardSnapshot>,
    /// Empty mapping after a failed fetch.
    pub latest_signals: Feed<LatestSignals>,
}

impl DashboardFeeds {
    /// `Failed` only when the very first snapshot fetch failed. That is the
    /// one state worth a "failed to load" notice with a reload action
    /// ([`PollHandle::refresh_now`]).
    pub fn load_state(&self) -> LoadState {
        self.snapshot.load_state()
    }

    /// Derived view over the current snapshot, `None` until one has loaded.
    pub fn view(&self) -> Option<DashboardView> {
        let snapshot = self.snapshot.value()?;
        let signals = self.latest_signals.value().unwrap_or_default();
        Some(DashboardView::compute(&snapshot, &signals))
    }
}

/// Feeds of one market's detail scope. Polling stops when this is dropped.
pub struct MarketFeeds {
    pub handle: PollHandle,
    pub code: MarketCode,
    pub unit: MinuteUnit,
    /// Fetched once on activation; `None` inside when the code is unlisted.
    pub market: Feed<Option<Market>>,
    pub ticker: Feed<Ticker>,
    /// Oldest first.
    pub candles: Feed<Vec<Candle>>,
    pub orders: Feed<Vec<OrderHistory>>,
    /// Empty after a failed fetch.
    pub signal_history: Feed<Vec<SignalLog>>,
}

impl MarketFeeds {
    pub fn view(&self) -> MarketDetailView {
        let market = self.market.value();
        let ticker = self.ticker.value();
        let candles = self.candles.value().unwrap_or_default();
        let orders = self.orders.value().unwrap_or_default();
        let history = self.signal_history.value().unwrap_or_default();
        MarketDetailView::compute(
            &self.code,
            market.as_deref().and_then(Option::as_ref),
            ticker.as_deref(),
            &candles,
            &orders,
            &history,
        )
    }
}

impl DashboardClient {
    /// Poll the dashboard snapshot and latest signals every
    /// `dashboard_interval` (5 s by default).
    ///
    /// Must be called from within a Tokio runtime.
    pub fn watch_dashboard(&self) -> DashboardFeeds {
        let mut scope = PollScope::new("dashboard", self.config.dashboard_interval);

        let client = self.clone();
        let snapshot = scope.register("snapshot", OnFailure::KeepLast, move || {
            let client = client.clone();
            async move { client.dashboard().get().await }
        });

        let client = self.clone();
        let latest_signals = scope.register(
            "latest_signals",
            OnFailure::Replace(LatestSignals::default()),
            move || {
                let client = client.clone();
                async move { client.signals().latest().await }
            },
        );

        DashboardFeeds {
            handle: scope.start(),
            snapshot,
            latest_signals,
        }
    }

    /// Poll one market's ticker, candles, closed orders and signal history
    /// every `market_interval` (10 s by default). Market details are fetched
    /// once. Switching `unit` means starting a new scope.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn watch_market(&self, code: &MarketCode, unit: MinuteUnit) -> MarketFeeds {
        let mut scope = PollScope::new(format!("market:{}", code), self.config.market_interval);

        let (client, c) = (self.clone(), code.clone());
        let market = scope.register_once("market", OnFailure::KeepLast, move || {
            let (client, c) = (client.clone(), c.clone());
            async move { client.markets().get(&c).await }
        });

        let (client, c) = (self.clone(), code.clone());
        let ticker = scope.register("ticker", OnFailure::KeepLast, move || {
            let (client, c) = (client.clone(), c.clone());
            async move { client.tickers().get(&c).await }
        });

        let (client, c) = (self.clone(), code.clone());
        let candles = scope.register("candles", OnFailure::KeepLast, move || {
            let (client, c) = (client.clone(), c.clone());
            async move { client.candles().chart(&c, unit).await }
        });

        let (client, c) = (self.clone(), code.clone());
        let orders = scope.register("orders", OnFailure::KeepLast, move || {
            let (client, c) = (client.clone(), c.clone());
            async move { client.orders().closed(Some(&c)).await }
        });

        let (client, c) = (self.clone(), code.clone());
        let signal_history =
            scope.register("signal_history", OnFailure::Replace(Vec::new()), move || {
                let (client, c) = (client.clone(), c.clone());
                async move { client.signals().recent_history(&c).await }
            });

        MarketFeeds {
            handle: scope.start(),
            code: code.clone(),
            unit,
            market,
            ticker,
            candles,
            orders,
            signal_history,
        }
    }
}
