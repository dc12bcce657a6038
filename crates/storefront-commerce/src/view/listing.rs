//! Product listing page state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::search::{CatalogQuery, CategoryFilter, SortOption};

/// Wishlist hearts on product cards, keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    items: HashSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for one product and return the new state.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        let added = if self.items.remove(id) {
            false
        } else {
            self.items.insert(id.clone());
            true
        };
        tracing::debug!(product = %id, wishlisted = added, "toggled wishlist");
        added
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Selections on the product listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListingState {
    /// Category bar selection, `All` by default.
    pub query: CatalogQuery,
    /// Wishlist flags for this page view.
    pub wishlist: Wishlist,
}

impl ProductListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category bar value; `"All"` clears the filter.
    pub fn select_category(&mut self, category: &str) {
        self.query.category = CategoryFilter::parse(category);
    }

    /// Select a sort key; unknown keys select `featured`.
    pub fn select_sort(&mut self, key: &str) {
        self.query.sort = SortOption::parse(key);
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.query.category
    }

    pub fn sort(&self) -> SortOption {
        self.query.sort
    }

    /// Products to render under the current selections.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.query.apply(catalog)
    }

    pub fn toggle_wishlist(&mut self, id: &ProductId) -> bool {
        self.wishlist.toggle(id)
    }
}
