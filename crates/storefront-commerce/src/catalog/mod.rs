//! Product catalog module.
//!
//! Contains the product record, the validated catalog collection and the
//! sources catalogs are loaded from.

mod product;
mod source;

pub use product::{Product, MAX_RATING};
pub use source::{CatalogSource, DemoCatalog, JsonFileCatalog, StaticCatalog};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ProductId;

/// Category value meaning "no filtering applied".
pub const ALL_CATEGORIES: &str = "All";

/// An immutable, validated collection of products.
///
/// Product order is the "featured" order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// All products in featured order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product, failing when it is absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The category bar: `"All"` followed by each distinct category in the
    /// order it first appears.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_CATEGORIES];
        for product in &self.products {
            if seen.insert(product.category.as_str()) {
                categories.push(product.category.as_str());
            }
        }
        categories
    }
}

/// Top-level shape of a fixture file: `{ "products": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CommerceError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(doc.products)
    }
}

impl From<Catalog> for CatalogDocument {
    fn from(catalog: Catalog) -> Self {
        CatalogDocument {
            products: catalog.products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, category: &str) -> Product {
        Product::new(id, format!("Product {id}"), category, Money::new(1000, Currency::USD))
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::new(vec![
            product("1", "Plants"),
            product("2", "Pots"),
            product("3", "Plants"),
            product("4", "Tools"),
        ])
        .unwrap();

        assert_eq!(catalog.categories(), vec!["All", "Plants", "Pots", "Tools"]);
    }

    #[test]
    fn test_empty_catalog_has_only_all() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), vec![ALL_CATEGORIES]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![product("1", "Plants"), product("1", "Pots")]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id == "1"));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![product("1", "Plants")]).unwrap();
        assert!(catalog.get(&ProductId::new("1")).is_some());
        assert!(matches!(
            catalog.require(&ProductId::new("2")),
            Err(CommerceError::ProductNotFound(_))
        ));
    }
}
