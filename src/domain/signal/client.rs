//! Signals sub-client: latest signal per market and per-market history.

use super::convert::history_from_wire;
use super::{LatestSignals, SignalLog};
use crate::client::DashboardClient;
use crate::domain::market::require_code;
use crate::error::SdkError;
use crate::shared::MarketCode;

pub struct Signals<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Signals<'a> {
    pub async fn latest(&self) -> Result<LatestSignals, SdkError> {
        Ok(self.client.http.get_latest_signals().await?.into())
    }

    /// Up to `limit` entries for `market`, in the order the backend returns
    /// them (newest first).
    pub async fn history(
        &self,
        market: &MarketCode,
        limit: u32,
    ) -> Result<Vec<SignalLog>, SdkError> {
        require_code(market)?;
        let resp = self.client.http.get_signal_history(market, limit).await?;
        Ok(history_from_wire(resp))
    }

    /// [`Self::history`] with the configured limit.
    pub async fn recent_history(&self, market: &MarketCode) -> Result<Vec<SignalLog>, SdkError> {
        self.history(market, self.client.config.signal_history_limit)
            .await
    }
}
