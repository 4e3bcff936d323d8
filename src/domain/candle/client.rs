//! Candles sub-client: minute candles in chronological order.

use super::convert::candles_from_wire;
use super::Candle;
use crate::client::DashboardClient;
use crate::domain::market::require_code;
use crate::error::SdkError;
use crate::shared::{MarketCode, MinuteUnit};

pub struct Candles<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Candles<'a> {
    /// The last `count` bars of `unit` minutes for `market`, oldest first.
    pub async fn minutes(
        &self,
        market: &MarketCode,
        unit: MinuteUnit,
        count: u32,
    ) -> Result<Vec<Candle>, SdkError> {
        require_code(market)?;
        let resp = self
            .client
            .http
            .get_minute_candles(market, unit, count)
            .await?;
        Ok(candles_from_wire(resp))
    }

    /// Like [`Self::minutes`] with the configured bar count.
    pub async fn chart(
        &self,
        market: &MarketCode,
        unit: MinuteUnit,
    ) -> Result<Vec<Candle>, SdkError> {
        self.minutes(market, unit, self.client.config.candle_count)
            .await
    }
}
