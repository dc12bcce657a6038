//! Per-page view state.
//!
//! Everything here lives for one page view and is dropped on navigation.
//! Nothing is persisted.

mod checkout;
mod listing;
mod pages;

pub use checkout::CheckoutState;
pub use listing::{ProductListingState, Wishlist};
pub use pages::{AuthMode, ProfileTab, ProfileView};
