//! Sort stage and the listing query that composes filter and sort.

use crate::catalog::{Catalog, Product};
use crate::search::{filter_products, CategoryFilter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLowHigh,
    /// Sort by price, high to low.
    PriceHighLow,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    /// Every option, in select-box order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Featured,
        SortOption::PriceLowHigh,
        SortOption::PriceHighLow,
        SortOption::Rating,
    ];

    /// Parse a sort key. Unknown keys fall back to `Featured`.
    pub fn parse(key: &str) -> Self {
        match key {
            "priceLowHigh" => SortOption::PriceLowHigh,
            "priceHighLow" => SortOption::PriceHighLow,
            "rating" => SortOption::Rating,
            _ => SortOption::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLowHigh => "priceLowHigh",
            SortOption::PriceHighLow => "priceHighLow",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLowHigh => "Price: Low to High",
            SortOption::PriceHighLow => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reorder products by `sort`.
///
/// The sort is stable: ties keep their input order. Prices compare the list
/// price, not the sale price.
pub fn sort_products(mut products: Vec<&Product>, sort: SortOption) -> Vec<&Product> {
    match sort {
        SortOption::Featured => {}
        SortOption::PriceLowHigh => {
            products.sort_by(|a, b| a.price.amount_cents.cmp(&b.price.amount_cents))
        }
        SortOption::PriceHighLow => {
            products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
        }
        SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    tracing::debug!(sort = %sort, count = products.len(), "sorted products");
    products
}

/// A listing query: category filter followed by sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Category selection.
    pub category: CategoryFilter,
    /// Sort option.
    pub sort: SortOption,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query against a catalog.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        sort_products(filter_products(catalog.products(), &self.category), self.sort)
    }
}
