//! # Domain Types
//!
//! Core value types shared by the catalogue, offers and the basket.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │  DiscountRate   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  code (key)     │   │  bps (u32)      │                             │
//! │  │  name           │   │  5000 = 50%     │                             │
//! │  │  price (Money)  │   │                 │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{
    validate_discount_bps, validate_price, validate_product_code, validate_product_name,
};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 5000 bps = 50% ("second one half price")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Half price.
    pub const HALF: DiscountRate = DiscountRate(5000);

    /// Creates a rate from basis points without range checks.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from basis points, rejecting anything above 100%.
    pub fn try_from_bps(bps: u32) -> CoreResult<Self> {
        validate_discount_bps(bps)?;
        Ok(DiscountRate(bps))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalogue.
///
/// Owned by the catalogue; the basket keeps snapshot copies and never
/// mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique business key (e.g. `"R01"`).
    pub code: String,

    /// Display name shown on receipts.
    pub name: String,

    /// Unit price. Never negative.
    pub price: Money,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{Money, Product};
    ///
    /// let widget = Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap();
    /// assert_eq!(widget.code, "R01");
    ///
    /// assert!(Product::new("", "Nameless", Money::zero()).is_err());
    /// assert!(Product::new("X1", "Refund", Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let code: String = code.into();
        let name: String = name.into();
        let code = code.trim().to_string();
        let name = name.trim().to_string();

        validate_product_code(&code)?;
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product { code, name, price })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
