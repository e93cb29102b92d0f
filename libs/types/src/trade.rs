//! Trade records
//!
//! `currency` and `amount` carry constraints that are enforced by
//! [`Validate`] at the request boundary and not re-checked in storage.

use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::user::UserId;
use crate::validate::{check, Validate};

/// Trade identifier. Not unique: appends are never checked for collisions.
pub type TradeId = i64;

/// Maximum number of characters in a currency code
pub const MAX_CURRENCY_LEN: usize = 5;

/// Smallest accepted trade amount (inclusive)
pub const MIN_AMOUNT: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub user_id: UserId,
    pub currency: String,
    pub side: String,
    pub amount: f64,
}

impl Trade {
    pub fn new(
        id: TradeId,
        user_id: UserId,
        currency: impl Into<String>,
        side: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id,
            user_id,
            currency: currency.into(),
            side: side.into(),
            amount,
        }
    }
}

impl Validate for Trade {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.currency.chars().count() > MAX_CURRENCY_LEN {
            errors.push(FieldError::max_length("currency", MAX_CURRENCY_LEN));
        }
        // NaN never compares >= 0
        if self.amount.is_nan() || self.amount < MIN_AMOUNT {
            errors.push(FieldError::not_ge("amount", MIN_AMOUNT));
        }

        check(errors)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_currency_limit(currency in "[A-Z]{0,10}", amount in 0.0f64..1e9) {
            let trade = Trade::new(1, 1, currency.clone(), "buy", amount);
            prop_assert_eq!(trade.validate().is_ok(), currency.len() <= MAX_CURRENCY_LEN);
        }

        #[test]
        fn prop_negative_amount_always_rejected(amount in -1e9f64..-1e-9) {
            let trade = Trade::new(1, 1, "BTC", "sell", amount);
            prop_assert!(trade.validate().is_err());
        }
    }
}
