//! Catalog, cart and view-state logic for the storefront.
//!
//! This crate holds everything the storefront pages compute, independent of
//! any rendering framework:
//!
//! - **Catalog**: Products, the category bar, fixture sources
//! - **Search**: Category filter, sort stage, header search suggestions
//! - **Cart**: Cart lines, discount rules, subtotal/discount/total
//! - **View**: Per-page state (listing selections, wishlist, checkout flags)
//! - **Account**: Login/register form validation
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = StaticCatalog.load().unwrap();
//!
//! let mut listing = ProductListingState::default();
//! listing.select_category("Plants");
//! listing.select_sort("priceLowHigh");
//! let visible = listing.visible(&catalog);
//! assert!(visible.iter().all(|p| p.category == "Plants"));
//!
//! let totals = demo_cart().totals("DISCOUNT10", &DiscountBook::default());
//! assert_eq!(totals.rounded().total.display(), "$51.72");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod search;
pub mod view;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogSource, DemoCatalog, JsonFileCatalog, Product, StaticCatalog,
        ALL_CATEGORIES,
    };

    // Search
    pub use crate::search::{
        filter_products, sort_products, CatalogQuery, CategoryFilter, SortOption, SuggestionBox,
        SuggestionKey,
    };

    // Cart
    pub use crate::cart::{
        demo_cart, Cart, CartLine, CartTotals, DiscountBook, DiscountRule, PresentedTotals,
    };

    // View
    pub use crate::view::{
        AuthMode, CheckoutState, ProductListingState, ProfileTab, ProfileView, Wishlist,
    };

    // Account
    pub use crate::account::{FormErrors, FormField, LoginForm, RegisterForm};
}
