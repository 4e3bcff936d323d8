//! Tickers sub-client: current price for one market.

use super::Ticker;
use crate::client::DashboardClient;
use crate::domain::market::require_code;
use crate::error::SdkError;
use crate::shared::MarketCode;

pub struct Tickers<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Tickers<'a> {
    pub async fn get(&self, market: &MarketCode) -> Result<Ticker, SdkError> {
        require_code(market)?;
        Ok(self.client.http.get_ticker(market).await?.into())
    }
}
