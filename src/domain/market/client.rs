//! Markets sub-client: market list with a TTL cache.

use super::convert::markets_from_wire;
use super::{Market, MarketNames};
use crate::client::DashboardClient;
use crate::error::SdkError;
use crate::shared::MarketCode;
use std::sync::Arc;
use std::time::Instant;

/// Sub-client for market reference data.
pub struct Markets<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Markets<'a> {
    /// All markets. Uses the TTL cache.
    pub async fn all(&self) -> Result<Arc<Vec<Market>>, SdkError> {
        {
            let cache = self.client.market_cache.read().await;
            if let Some((markets, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.market_cache_ttl {
                    return Ok(markets.clone());
                }
            }
        }

        let resp = self.client.http.get_markets().await?;
        let markets = Arc::new(markets_from_wire(resp));
        *self.client.market_cache.write().await = Some((markets.clone(), Instant::now()));
        Ok(markets)
    }

    /// One market by code, `None` when the list has no such entry.
    pub async fn get(&self, code: &MarketCode) -> Result<Option<Market>, SdkError> {
        let markets = self.all().await?;
        Ok(markets.iter().find(|m| &m.market_code == code).cloned())
    }

    /// Name lookup built from the (cached) market list.
    pub async fn names(&self) -> Result<MarketNames, SdkError> {
        Ok(MarketNames::new(&self.all().await?))
    }

    /// Drop the cached list so the next call refetches.
    pub async fn clear_cache(&self) {
        *self.client.market_cache.write().await = None;
    }
}
