//! Conversion: OrderHistoryResponse → OrderHistory (TryFrom + validation).

use super::wire::OrderHistoryResponse;
use super::{OrderHistory, ValidationError};
use crate::shared::{decimal_or_zero, parse_decimal};
use chrono::{DateTime, Utc};

fn opt_decimal(field: &str, value: Option<&str>) -> rust_decimal::Decimal {
    decimal_or_zero(field, value.unwrap_or_default())
}

impl TryFrom<OrderHistoryResponse> for OrderHistory {
    type Error = ValidationError;

    fn try_from(source: OrderHistoryResponse) -> Result<Self, Self::Error> {
        if source.uuid.trim().is_empty() {
            return Err(ValidationError::IdMissing);
        }
        let created_at = DateTime::parse_from_rfc3339(source.created_at.trim())
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| ValidationError::InvalidTimestamp {
                id: source.uuid.clone(),
                value: source.created_at.clone(),
            })?;

        Ok(Self {
            price: source.price.as_deref().and_then(parse_decimal),
            volume: source.volume.as_deref().and_then(parse_decimal),
            remaining_volume: opt_decimal("remaining_volume", source.remaining_volume.as_deref()),
            executed_volume: opt_decimal("executed_volume", source.executed_volume.as_deref()),
            executed_funds: opt_decimal("executed_funds", source.executed_funds.as_deref()),
            paid_fee: opt_decimal("paid_fee", source.paid_fee.as_deref()),
            id: source.uuid,
            side: source.side,
            order_type: source.ord_type.into(),
            state: source.state.into(),
            market: source.market,
            created_at,
        })
    }
}

/// Convert an order list, dropping entries that fail validation.
pub(crate) fn orders_from_wire(source: Vec<OrderHistoryResponse>) -> Vec<OrderHistory> {
    source
        .into_iter()
        .filter_map(|o| match OrderHistory::try_from(o) {
            Ok(order) => Some(order),
            Err(e) => {
                tracing::warn!("Skipping order entry: {}", e);
                None
            }
        })
        .collect()
}
