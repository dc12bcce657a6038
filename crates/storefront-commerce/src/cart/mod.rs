//! Shopping cart module.
//!
//! Contains the checkout cart, discount rules and totals.

mod cart;
mod discount;
mod pricing;

pub use cart::{demo_cart, Cart, CartLine};
pub use discount::{DiscountBook, DiscountRule, DEFAULT_DISCOUNT_CODE};
pub use pricing::{CartTotals, PresentedTotals};
