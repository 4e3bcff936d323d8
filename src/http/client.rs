//! Low-level HTTP client: `DashboardHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Every call is a single GET: failures
//! surface to the caller untouched and the poller decides what to do next.

use crate::domain::account::wire::AccountResponse;
use crate::domain::candle::wire::CandleResponse;
use crate::domain::dashboard::wire::DashboardResponse;
use crate::domain::market::wire::MarketResponse;
use crate::domain::order::wire::OrderHistoryResponse;
use crate::domain::signal::wire::{LatestSignalsResponse, SignalLogResponse};
use crate::domain::ticker::wire::TickerResponse;
use crate::error::HttpError;
use crate::network::API_PREFIX;
use crate::shared::{MarketCode, MinuteUnit};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the dashboard REST API.
#[derive(Clone)]
pub struct DashboardHttp {
    base_url: String,
    client: Client,
}

impl DashboardHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    // ── Dashboard ────────────────────────────────────────────────────────

    pub async fn get_dashboard(&self) -> Result<DashboardResponse, HttpError> {
        self.get(&self.url("/dashboard")).await
    }

    // ── Accounts ─────────────────────────────────────────────────────────

    pub async fn get_accounts(&self) -> Result<Vec<AccountResponse>, HttpError> {
        self.get(&self.url("/accounts")).await
    }

    pub async fn get_profit(&self, market: &MarketCode) -> Result<serde_json::Value, HttpError> {
        let url = self.url(&format!("/profit/{}", urlencoding::encode(market.as_str())));
        self.get(&url).await
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self) -> Result<Vec<MarketResponse>, HttpError> {
        self.get(&self.url("/markets")).await
    }

    pub async fn get_ticker(&self, market: &MarketCode) -> Result<TickerResponse, HttpError> {
        let url = format!(
            "{}?market={}",
            self.url("/ticker"),
            urlencoding::encode(market.as_str())
        );
        self.get(&url).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn get_closed_orders(
        &self,
        market: Option<&MarketCode>,
    ) -> Result<Vec<OrderHistoryResponse>, HttpError> {
        let mut url = self.url("/orders/closed");
        if let Some(m) = market {
            url = format!("{}?market={}", url, urlencoding::encode(m.as_str()));
        }
        self.get(&url).await
    }

    // ── Candles ──────────────────────────────────────────────────────────

    pub async fn get_minute_candles(
        &self,
        market: &MarketCode,
        unit: MinuteUnit,
        count: u32,
    ) -> Result<Vec<CandleResponse>, HttpError> {
        let url = format!(
            "{}?market={}&count={}",
            self.url(&format!("/candles/minutes/{}", unit.minutes())),
            urlencoding::encode(market.as_str()),
            count
        );
        self.get(&url).await
    }

    // ── Signals ──────────────────────────────────────────────────────────

    pub async fn get_latest_signals(&self) -> Result<LatestSignalsResponse, HttpError> {
        self.get(&self.url("/signals/latest")).await
    }

    pub async fn get_signal_history(
        &self,
        market: &MarketCode,
        limit: u32,
    ) -> Result<Vec<SignalLogResponse>, HttpError> {
        let url = format!(
            "{}?limit={}",
            self.url(&format!(
                "/signals/{}/history",
                urlencoding::encode(market.as_str())
            )),
            limit
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(HttpError::Request {
                status: status.as_u16(),
                body,
            });
        }

        parse_body(&body)
    }
}

/// Decode a successful response body. Invalid JSON and shape mismatches are
/// both reported as `HttpError::Parse`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, HttpError> {
    serde_json::from_str(body).map_err(|e| HttpError::Parse(e.to_string()))
}
