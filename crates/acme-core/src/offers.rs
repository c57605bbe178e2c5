//! # Offers
//!
//! Promotional discount policies.
//!
//! ## How Offers Compose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: [A, B, B, C]                                                    │
//! │     │                                                                   │
//! │     ├──► offer 1.apply(items) ──► 6.00 ─┐                               │
//! │     │                                   ├──► Σ = total discount         │
//! │     └──► offer 2.apply(items) ──► 0.00 ─┘                               │
//! │                                                                         │
//! │  Every offer sees the FULL item list. Discounts are summed, never       │
//! │  chained, so the order of offers cannot change the total.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{DiscountRate, Product};
use crate::validation::{validate_min_quantity, validate_product_code};

/// A discount policy evaluated against the whole basket.
///
/// Implementations are stateless: they compute their own grouping from the
/// item list on every call and must not assume exclusive claim over any item.
pub trait Offer: fmt::Debug + Send + Sync {
    /// Short label used in price breakdowns.
    fn name(&self) -> &str;

    /// Discount earned by `items`, or `Money::zero()` when the condition is
    /// not met.
    fn apply(&self, items: &[Product]) -> Money;
}

// =============================================================================
// Buy One, Get One Discounted
// =============================================================================

/// "Buy one, get the second at a discount" for a single product code.
///
/// Items are paired in basket order; the second item of every complete pair
/// is discounted by `rate`. With `DiscountRate::HALF` this is the classic
/// "second one half price".
///
/// ## Example
/// ```rust
/// use acme_core::{BuyOneGetOneDiscounted, DiscountRate, Money, Offer, Product};
///
/// let offer = BuyOneGetOneDiscounted::new("R01", DiscountRate::HALF).unwrap();
/// let red = Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap();
///
/// assert_eq!(offer.apply(&[red.clone()]), Money::zero());
/// assert_eq!(offer.apply(&[red.clone(), red]).cents(), 1648);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyOneGetOneDiscounted {
    name: String,
    product_code: String,
    rate: DiscountRate,
}

impl BuyOneGetOneDiscounted {
    pub fn new(product_code: impl Into<String>, rate: DiscountRate) -> CoreResult<Self> {
        let product_code: String = product_code.into();
        validate_product_code(&product_code)?;
        let rate = DiscountRate::try_from_bps(rate.bps())?;

        Ok(BuyOneGetOneDiscounted {
            name: format!("Buy one {}, get the second {} off", product_code, rate),
            product_code,
            rate,
        })
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn rate(&self) -> DiscountRate {
        self.rate
    }
}

impl Offer for BuyOneGetOneDiscounted {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, items: &[Product]) -> Money {
        items
            .iter()
            .filter(|item| item.code == self.product_code)
            .skip(1)
            .step_by(2)
            .map(|item| item.price.apply_rate(self.rate))
            .sum()
    }
}

// =============================================================================
// Bulk Discount
// =============================================================================

/// Percentage off every unit of a product once enough of it is in the basket.
///
/// ## Example
/// ```text
/// BulkDiscount { code: "B01", min_quantity: 3, rate: 10% }
///
///   [B01, B01]        → 0.00
///   [B01, B01, B01]   → 10% of (7.95 × 3) = 2.39
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDiscount {
    name: String,
    product_code: String,
    min_quantity: usize,
    rate: DiscountRate,
}

impl BulkDiscount {
    pub fn new(
        product_code: impl Into<String>,
        min_quantity: usize,
        rate: DiscountRate,
    ) -> CoreResult<Self> {
        let product_code: String = product_code.into();
        validate_product_code(&product_code)?;
        validate_min_quantity(min_quantity)?;
        let rate = DiscountRate::try_from_bps(rate.bps())?;

        Ok(BulkDiscount {
            name: format!("{} off {} when buying {} or more", rate, product_code, min_quantity),
            product_code,
            min_quantity,
            rate,
        })
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn min_quantity(&self) -> usize {
        self.min_quantity
    }

    pub fn rate(&self) -> DiscountRate {
        self.rate
    }
}

impl Offer for BulkDiscount {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, items: &[Product]) -> Money {
        let matching: Vec<&Product> = items
            .iter()
            .filter(|item| item.code == self.product_code)
            .collect();

        if matching.len() < self.min_quantity {
            return Money::zero();
        }

        // Round once on the group total, not per unit
        let line_total: Money = matching.iter().map(|item| item.price).sum();
        line_total.apply_rate(self.rate)
    }
}
