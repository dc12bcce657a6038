//! Checkout page state.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartTotals, DiscountBook};

/// Form fields under "Additional Options".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutState {
    /// Text typed into the discount code box.
    pub discount_code: String,
    /// "This order is a gift" checkbox.
    pub is_gift: bool,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_discount_code(&mut self, code: impl Into<String>) {
        self.discount_code = code.into();
    }

    /// Flip the gift checkbox and return the new state.
    pub fn toggle_gift(&mut self) -> bool {
        self.is_gift = !self.is_gift;
        self.is_gift
    }

    /// Totals for the order summary with the code currently typed.
    pub fn totals(&self, cart: &Cart, discounts: &DiscountBook) -> CartTotals {
        cart.totals(&self.discount_code, discounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::demo_cart;

    #[test]
    fn test_typing_code_applies_discount() {
        let cart = demo_cart();
        let book = DiscountBook::default();
        let mut state = CheckoutState::new();

        let shown = state.totals(&cart, &book).rounded();
        assert_eq!(shown.total.display(), "$57.47");

        state.set_discount_code("DISCOUNT1");
        assert!(!state.totals(&cart, &book).has_discount());

        state.set_discount_code("DISCOUNT10");
        let totals = state.totals(&cart, &book);
        assert_eq!(totals.applied_code.as_deref(), Some("DISCOUNT10"));
        assert_eq!(totals.rounded().total.display(), "$51.72");
    }

    #[test]
    fn test_gift_toggle() {
        let mut state = CheckoutState::new();
        assert!(state.toggle_gift());
        assert!(!state.toggle_gift());
        assert!(!state.is_gift);
    }
}
