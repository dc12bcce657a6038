//! Catalog sources.
//!
//! Pages never build product lists inline; they ask a [`CatalogSource`].

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Something that can produce a catalog.
pub trait CatalogSource {
    /// Load and validate the catalog.
    fn load(&self) -> Result<Catalog, CommerceError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Fixture bundled into the binary.
const BUNDLED_PRODUCTS: &str = include_str!("../../fixtures/products.json");

/// The bundled product fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    fn load(&self) -> Result<Catalog, CommerceError> {
        let catalog: Catalog = serde_json::from_str(BUNDLED_PRODUCTS)?;
        tracing::info!(source = "static", products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// A JSON fixture on disk, shaped `{ "products": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Catalog, CommerceError> {
        let content = std::fs::read_to_string(&self.path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        tracing::info!(
            source = "file",
            path = %self.path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Generated placeholder listing for the home page.
///
/// Seeded, so the same `(count, seed)` always yields the same products.
#[derive(Debug, Clone, Copy)]
pub struct DemoCatalog {
    pub count: usize,
    pub seed: u64,
}

/// Category given to every generated product.
pub const DEMO_CATEGORY: &str = "General";

impl DemoCatalog {
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    fn generate(&self) -> Vec<Product> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (1..=self.count)
            .map(|n| {
                // Price in [0, 100), rating floor(u * 4.5) + 1 in 1..=5.
                let price = rng.gen::<f64>() * 100.0;
                let rating = (rng.gen::<f64>() * 4.5).floor() + 1.0;
                Product::new(
                    n.to_string(),
                    format!("Product {n}"),
                    DEMO_CATEGORY,
                    Money::from_decimal(price, Currency::USD),
                )
                .with_rating(rating)
                .with_image(format!("https://via.placeholder.com/150?text=Product+{n}"))
            })
            .collect()
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new(10, 42)
    }
}

impl CatalogSource for DemoCatalog {
    fn load(&self) -> Result<Catalog, CommerceError> {
        let catalog = Catalog::new(self.generate())?;
        tracing::info!(
            source = "demo",
            seed = self.seed,
            products = catalog.len(),
            "catalog generated"
        );
        Ok(catalog)
    }

    fn name(&self) -> &str {
        "demo"
    }
}
