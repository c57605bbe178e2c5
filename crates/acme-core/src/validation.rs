//! # Validation Module
//!
//! Input validation for catalogue and offer data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Configuration (acme-config)                                  │
//! │  ├── TOML shape checks (deserialization)                               │
//! │  └── Money::parse for every amount                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (acme-core)                                     │
//! │  ├── THIS MODULE: product and rate rules                               │
//! │  └── DeliveryRules::new tier ordering                                  │
//! │                                                                         │
//! │  Pricing itself never validates: bad data cannot reach it              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::validation::{validate_product_code, validate_discount_bps};
//!
//! validate_product_code("R01").unwrap();
//! validate_discount_bps(5000).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::{Money, MAX_AMOUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product code accepted.
pub const MAX_CODE_LEN: usize = 50;

/// Longest product name accepted.
pub const MAX_NAME_LEN: usize = 200;

/// 100% in basis points.
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code (the catalogue key).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores (so no surrounding
///   whitespace; callers that accept free text trim first)
///
/// ## Example
/// ```rust
/// use acme_core::validation::validate_product_code;
///
/// assert!(validate_product_code("G01").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("has space").is_err());
/// assert!(validate_product_code(" R01").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price: zero (free items) up to [`MAX_AMOUNT`].
///
/// ## Example
/// ```rust
/// use acme_core::{validation::validate_price, Money};
///
/// assert!(validate_price(Money::from_cents(795)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if price > MAX_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_AMOUNT.cents(),
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points (0% to 100%).
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount rate".to_string(),
            min: 0,
            max: MAX_DISCOUNT_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a minimum quantity threshold (must be at least 1).
pub fn validate_min_quantity(min_quantity: usize) -> ValidationResult<()> {
    if min_quantity == 0 {
        return Err(ValidationError::OutOfRange {
            field: "min_quantity".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_code() {
        assert!(validate_product_code("R01").is_ok());
        assert!(validate_product_code("WIDGET-RED").is_ok());
        assert!(validate_product_code("widget_1").is_ok());

        assert!(validate_product_code("").is_err());
        assert!(validate_product_code("   ").is_err());
        assert!(validate_product_code("has space").is_err());
        assert!(validate_product_code(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_product_code_rejects_padding() {
        for code in [" R01", "R01 ", " R01 ", "R01\n"] {
            assert!(
                matches!(
                    validate_product_code(code),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "expected InvalidFormat for {:?}",
                code
            );
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Red Widget").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(3295)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_price_upper_bound() {
        assert!(validate_price(MAX_AMOUNT).is_ok());
        assert!(matches!(
            validate_price(Money::from_cents(MAX_AMOUNT.cents() + 1)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_discount_bps() {
        assert!(validate_discount_bps(0).is_ok());
        assert!(validate_discount_bps(5000).is_ok());
        assert!(validate_discount_bps(10000).is_ok());
        assert!(validate_discount_bps(10001).is_err());
    }

    #[test]
    fn test_validate_min_quantity() {
        assert!(validate_min_quantity(1).is_ok());
        assert!(validate_min_quantity(0).is_err());
    }
}
