//! Category filter stage.

use crate::catalog::{Product, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category selection on the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only products whose category equals this label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Parse a category bar value. `"All"` is the sentinel; anything else,
    /// including labels no product carries, selects that label.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    /// Create a filter for one category.
    pub fn category(name: impl Into<String>) -> Self {
        Self::parse(&name.into())
    }

    /// Case-sensitive exact match on the category label.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Select the products in `filter`'s category, preserving input order.
///
/// An unknown category yields an empty list, not an error.
pub fn filter_products<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    let selected: Vec<&Product> = products.iter().filter(|p| filter.matches(p)).collect();
    tracing::debug!(
        category = %filter,
        total = products.len(),
        selected = selected.len(),
        "filtered products"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn products() -> Vec<Product> {
        let price = Money::new(999, Currency::USD);
        vec![
            Product::new("1", "Fern", "Plants", price),
            Product::new("2", "Pot", "Pots", price),
            Product::new("3", "Cactus", "Plants", price),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let products = products();
        let selected = filter_products(&products, &CategoryFilter::All);
        assert_eq!(ids(&selected), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_category_match_is_exact() {
        let products = products();
        let selected = filter_products(&products, &CategoryFilter::category("Plants"));
        assert_eq!(ids(&selected), vec!["1", "3"]);

        let selected = filter_products(&products, &CategoryFilter::category("plants"));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let products = products();
        assert!(filter_products(&products, &CategoryFilter::parse("Lighting")).is_empty());
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("all"),
            CategoryFilter::Only("all".to_string())
        );
    }

    #[test]
    fn test_serde_as_plain_string() {
        let filter: CategoryFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(filter, CategoryFilter::All);
        let json = serde_json::to_string(&CategoryFilter::category("Pots")).unwrap();
        assert_eq!(json, "\"Pots\"");
    }
}
