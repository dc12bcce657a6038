//! Cart and cart line types.

use crate::cart::{CartTotals, DiscountBook};
use crate::error::CommerceError;
use crate::ids::CartLineId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One entry on the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line identifier.
    pub id: CartLineId,
    /// Product name as shown on the summary.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a cart line. Quantity must be positive and the price
    /// non-negative.
    pub fn new(
        id: impl Into<CartLineId>,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<Self, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        if price.is_negative() {
            return Err(CommerceError::InvalidPrice(price.display()));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        })
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price.multiply(i64::from(self.quantity))
    }
}

/// A fixed list of cart lines in one currency.
///
/// There are no add/remove operations; the subtotal is computed once on
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
    subtotal: Money,
}

impl Cart {
    /// Build a cart, checking that all lines share a currency and the
    /// subtotal fits.
    pub fn new(lines: Vec<CartLine>) -> Result<Self, CommerceError> {
        let currency = lines
            .first()
            .map(|line| line.price.currency)
            .unwrap_or_default();

        let mut subtotal = Money::zero(currency);
        for line in &lines {
            subtotal = subtotal.checked_add(&line.line_total()?)?;
        }

        Ok(Self {
            lines,
            currency,
            subtotal,
        })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Total quantity across lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Compute subtotal, discount and total for a discount code.
    ///
    /// Never fails: a code the book does not know gives no discount.
    pub fn totals(&self, code: &str, discounts: &DiscountBook) -> CartTotals {
        let rule = discounts.lookup(code);
        if rule.is_none() && !code.is_empty() {
            tracing::warn!(code, "unrecognized discount code");
        }
        let totals = CartTotals::compute(self.subtotal, rule);
        tracing::debug!(
            lines = self.lines.len(),
            subtotal = %totals.subtotal,
            discount = %totals.discount,
            total = %totals.total,
            "computed cart totals"
        );
        totals
    }
}

/// The checkout page's demonstration cart.
pub fn demo_cart() -> Cart {
    let usd = |cents| Money::new(cents, Currency::USD);
    let lines = vec![
        CartLine {
            id: CartLineId::new("1"),
            name: "Plant Pot".to_string(),
            price: usd(1299),
            quantity: 2,
        },
        CartLine {
            id: CartLineId::new("2"),
            name: "Succulent Plant".to_string(),
            price: usd(899),
            quantity: 1,
        },
        CartLine {
            id: CartLineId::new("3"),
            name: "Garden Tools".to_string(),
            price: usd(2250),
            quantity: 1,
        },
    ];
    Cart {
        lines,
        currency: Currency::USD,
        subtotal: usd(5747),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let result = CartLine::new("1", "Plant Pot", usd(1299), 0);
        assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
    }

    #[test]
    fn test_line_total() {
        let line = CartLine::new("1", "Plant Pot", usd(1299), 2).unwrap();
        assert_eq!(line.line_total().unwrap(), usd(2598));
    }

    #[test]
    fn test_subtotal_matches_demo_cart() {
        let demo = demo_cart();
        let rebuilt = Cart::new(demo.lines().to_vec()).unwrap();
        assert_eq!(rebuilt.subtotal(), usd(5747));
        assert_eq!(rebuilt, demo);
        assert_eq!(demo.item_count(), 4);
    }

    #[test]
    fn test_mixed_currencies_rejected() {
        let lines = vec![
            CartLine::new("1", "Pot", usd(100), 1).unwrap(),
            CartLine::new("2", "Seeds", Money::new(100, Currency::EUR), 1).unwrap(),
        ];
        assert!(matches!(
            Cart::new(lines),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new(Vec::new()).unwrap();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }
}
