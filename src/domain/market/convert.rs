//! Conversion: MarketResponse → Market (TryFrom + validation).

use super::wire::MarketResponse;
use super::{Market, ValidationError};

impl TryFrom<MarketResponse> for Market {
    type Error = ValidationError;

    fn try_from(source: MarketResponse) -> Result<Self, Self::Error> {
        if source.market.as_str().trim().is_empty() {
            return Err(ValidationError::MarketCodeMissing);
        }
        Ok(Self {
            market_code: source.market,
            korean_name: source.korean_name,
            english_name: source.english_name,
            market_warning: source.market_warning,
        })
    }
}

/// Convert a market list, dropping entries that fail validation.
pub(crate) fn markets_from_wire(source: Vec<MarketResponse>) -> Vec<Market> {
    source
        .into_iter()
        .filter_map(|m| match Market::try_from(m) {
            Ok(market) => Some(market),
            Err(e) => {
                tracing::warn!("Skipping market entry: {}", e);
                None
            }
        })
        .collect()
}
