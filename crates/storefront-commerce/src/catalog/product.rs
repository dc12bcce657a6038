//! Product records.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Immutable once loaded. Serializes to the flat fixture shape
/// (`price: 12.99`, `discountPrice`, `reviews`) rather than nested money
/// objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand line shown under the name.
    pub brand: Option<String>,
    /// Free-text category label, compared exactly.
    pub category: String,
    /// List price.
    pub price: Money,
    /// Sale price, never above `price`.
    pub discount_price: Option<Money>,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Image URL or asset path.
    pub image: String,
}

impl Product {
    /// Create a product with no discount, rating or reviews.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: None,
            category: category.into(),
            price,
            discount_price: None,
            rating: 0.0,
            review_count: 0,
            image: String::new(),
        }
    }

    pub fn with_discount_price(mut self, price: Money) -> Self {
        self.discount_price = Some(price);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_reviews(mut self, count: u32) -> Self {
        self.review_count = count;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Check the data-model rules: non-negative prices, a discount no higher
    /// than the list price in the same currency, and a rating within 0..=5.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let id = self.id.as_str();

        if self.price.is_negative() {
            return Err(CommerceError::invalid_product(id, "price is negative"));
        }

        if let Some(discount) = &self.discount_price {
            if discount.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: discount.currency.code().to_string(),
                });
            }
            if discount.is_negative() {
                return Err(CommerceError::invalid_product(id, "discount price is negative"));
            }
            if discount.amount_cents > self.price.amount_cents {
                return Err(CommerceError::invalid_product(
                    id,
                    format!(
                        "discount price {} exceeds price {}",
                        discount.display(),
                        self.price.display()
                    ),
                ));
            }
        }

        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::invalid_product(
                id,
                format!("rating {} outside 0..={}", self.rating, MAX_RATING),
            ));
        }

        Ok(())
    }

    /// Price the customer pays: the sale price when there is one.
    pub fn effective_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Whether the card shows a "Sale" badge.
    pub fn is_on_sale(&self) -> bool {
        self.discount_price.is_some()
    }
}

/// Fixture ids may be JSON numbers or strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(u64),
    Text(String),
}

/// Wire shape of a product in fixture files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: RecordId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    category: String,
    price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discount_price: Option<f64>,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    reviews: u32,
    #[serde(default)]
    image: String,
    #[serde(default)]
    currency: Currency,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CommerceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = match record.id {
            RecordId::Number(n) => ProductId::from(n),
            RecordId::Text(s) => ProductId::from(s),
        };
        let product = Product {
            id,
            name: record.name,
            brand: record.brand,
            category: record.category,
            price: Money::from_decimal(record.price, record.currency),
            discount_price: record
                .discount_price
                .map(|p| Money::from_decimal(p, record.currency)),
            rating: record.rating,
            review_count: record.reviews,
            image: record.image,
        };
        product.validate()?;
        Ok(product)
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        ProductRecord {
            id: RecordId::Text(product.id.into_inner()),
            name: product.name,
            brand: product.brand,
            category: product.category,
            price: product.price.to_decimal(),
            discount_price: product.discount_price.map(|p| p.to_decimal()),
            rating: product.rating,
            reviews: product.review_count,
            image: product.image,
            currency: product.price.currency,
        }
    }
}
