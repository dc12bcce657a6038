//! Search module.
//!
//! Category filter and sort stages over a catalog, plus the header's
//! search-suggestion box.

mod filter;
mod query;
mod suggest;

pub use filter::{filter_products, CategoryFilter};
pub use query::{sort_products, CatalogQuery, SortOption};
pub use suggest::{SuggestionBox, SuggestionKey, DEFAULT_SUGGESTIONS};
