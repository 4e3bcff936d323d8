//! Conversion: AccountResponse → Account.

use super::wire::AccountResponse;
use super::Account;
use crate::shared::decimal_or_zero;

impl From<AccountResponse> for Account {
    fn from(a: AccountResponse) -> Self {
        Self {
            balance: decimal_or_zero("balance", &a.balance),
            locked: decimal_or_zero("locked", &a.locked),
            avg_buy_price: decimal_or_zero("avg_buy_price", &a.avg_buy_price),
            currency: a.currency,
            avg_buy_price_modified: a.avg_buy_price_modified,
            unit_currency: a.unit_currency,
        }
    }
}
