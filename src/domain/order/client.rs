//! Orders sub-client: closed order history.

use super::convert::orders_from_wire;
use super::OrderHistory;
use crate::client::DashboardClient;
use crate::error::SdkError;
use crate::shared::MarketCode;

pub struct Orders<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Orders<'a> {
    /// Closed orders, optionally scoped to one market. Returned in the order
    /// the backend sends them; use [`super::sort_newest_first`] for display.
    pub async fn closed(&self, market: Option<&MarketCode>) -> Result<Vec<OrderHistory>, SdkError> {
        let resp = self.client.http.get_closed_orders(market).await?;
        Ok(orders_from_wire(resp))
    }
}
