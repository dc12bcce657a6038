//! Discount codes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Code accepted by the default discount book.
pub const DEFAULT_DISCOUNT_CODE: &str = "DISCOUNT10";

/// A flat percentage off the subtotal, unlocked by a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Code the customer types, matched case-sensitively.
    pub code: String,
    /// Percentage off (0 - 100).
    pub percent: Decimal,
}

impl DiscountRule {
    /// Create a rule, rejecting percentages outside 0..=100.
    pub fn new(code: impl Into<String>, percent: Decimal) -> Result<Self, CommerceError> {
        let rule = Self {
            code: code.into(),
            percent,
        };
        rule.validate()?;
        Ok(rule)
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.code.is_empty() {
            return Err(CommerceError::Config("discount code is empty".to_string()));
        }
        if self.percent < Decimal::ZERO || self.percent > Decimal::ONE_HUNDRED {
            return Err(CommerceError::Config(format!(
                "discount {} has percent {} outside 0..=100",
                self.code, self.percent
            )));
        }
        Ok(())
    }

    /// Exact string comparison; "discount10" does not match "DISCOUNT10".
    pub fn matches(&self, code: &str) -> bool {
        self.code == code
    }

    /// Discount on `subtotal`, unrounded.
    pub fn amount(&self, subtotal: Decimal) -> Decimal {
        subtotal * self.percent / Decimal::ONE_HUNDRED
    }
}

impl Default for DiscountRule {
    fn default() -> Self {
        Self {
            code: DEFAULT_DISCOUNT_CODE.to_string(),
            percent: Decimal::TEN,
        }
    }
}

/// The set of codes the checkout recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountBook {
    rules: Vec<DiscountRule>,
}

impl DiscountBook {
    /// Build a book, validating every rule. Later duplicates of a code are
    /// rejected.
    pub fn new(rules: Vec<DiscountRule>) -> Result<Self, CommerceError> {
        for (i, rule) in rules.iter().enumerate() {
            rule.validate()?;
            if rules[..i].iter().any(|r| r.code == rule.code) {
                return Err(CommerceError::Config(format!(
                    "discount code {} defined twice",
                    rule.code
                )));
            }
        }
        Ok(Self { rules })
    }

    /// Find the rule for a code. Empty and unknown codes give `None`.
    pub fn lookup(&self, code: &str) -> Option<&DiscountRule> {
        self.rules.iter().find(|r| r.matches(code))
    }

    pub fn rules(&self) -> &[DiscountRule] {
        &self.rules
    }
}

impl Default for DiscountBook {
    fn default() -> Self {
        Self {
            rules: vec![DiscountRule::default()],
        }
    }
}
