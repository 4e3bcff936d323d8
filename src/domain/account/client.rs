//! Accounts sub-client: balances and per-market profit info.

use super::Account;
use crate::client::DashboardClient;
use crate::domain::market::require_code;
use crate::error::SdkError;
use crate::shared::MarketCode;

pub struct Accounts<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Accounts<'a> {
    pub async fn get(&self) -> Result<Vec<Account>, SdkError> {
        let resp = self.client.http.get_accounts().await?;
        Ok(resp.into_iter().map(Account::from).collect())
    }

    /// Backend-computed profit info for one market. The payload has no fixed
    /// schema, so it is returned as raw JSON.
    pub async fn profit(&self, market: &MarketCode) -> Result<serde_json::Value, SdkError> {
        require_code(market)?;
        Ok(self.client.http.get_profit(market).await?)
    }
}
