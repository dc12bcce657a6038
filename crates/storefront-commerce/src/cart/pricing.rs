//! Cart totals.

use crate::cart::DiscountRule;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subtotal, discount and total at full precision.
///
/// Nothing here is rounded; call [`CartTotals::rounded`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// Amount taken off by the discount code.
    pub discount: Decimal,
    /// `subtotal - discount`.
    pub total: Decimal,
    /// Currency of all three figures.
    pub currency: Currency,
    /// Code that produced the discount, if one matched.
    pub applied_code: Option<String>,
}

impl CartTotals {
    /// Apply an optional rule to an exact subtotal.
    pub fn compute(subtotal: Money, rule: Option<&DiscountRule>) -> Self {
        let exact = subtotal.to_exact();
        let discount = rule.map_or(Decimal::ZERO, |r| r.amount(exact));
        Self {
            subtotal: exact,
            discount,
            total: exact - discount,
            currency: subtotal.currency,
            applied_code: rule.map(|r| r.code.clone()),
        }
    }

    /// Whether a discount line appears on the summary.
    pub fn has_discount(&self) -> bool {
        self.discount > Decimal::ZERO
    }

    /// Round each figure independently to the currency's precision.
    pub fn rounded(&self) -> PresentedTotals {
        PresentedTotals {
            subtotal: Money::from_exact_rounded(self.subtotal, self.currency),
            discount: Money::from_exact_rounded(self.discount, self.currency),
            total: Money::from_exact_rounded(self.total, self.currency),
        }
    }
}

/// Totals as shown on the order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedTotals {
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}
