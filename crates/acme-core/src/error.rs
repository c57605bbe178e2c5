//! # Error Types
//!
//! Domain-specific error types for acme-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  acme-core errors (this file)                                          │
//! │  ├── CoreError        - Pricing domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  acme-config errors (separate crate)                                   │
//! │  └── ConfigError      - File, TOML and environment failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConfigError → Caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, input text, etc.)
//! 3. Errors are enum variants, never String
//! 4. Nothing in this crate catches and suppresses an error

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Product code does not resolve in the catalogue.
    ///
    /// ## When This Occurs
    /// - `Basket::add` is given a code the catalogue doesn't know
    ///
    /// The basket never recovers from this locally: adding a product that
    /// does not exist is a caller error.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A monetary amount could not be constructed.
    ///
    /// ## When This Occurs
    /// - More fractional digits than the currency supports (`"1.234"`)
    /// - Non-numeric text (`"abc"`, `"1.2.3"`)
    /// - Value outside the representable range
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Delivery tiers are misconfigured.
    ///
    /// Raised by `DeliveryRules::new`, never by `calculate`.
    #[error("Invalid delivery rules: {0}")]
    InvalidDeliveryRules(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn invalid_amount(input: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidAmount {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of catalogue and offer data before any pricing
/// runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., illegal characters in a product code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("X99".to_string());
        assert_eq!(err.to_string(), "Product not found: X99");

        let err = CoreError::invalid_amount("1.234", "at most 2 fractional digits allowed");
        assert_eq!(
            err.to_string(),
            "Invalid amount '1.234': at most 2 fractional digits allowed"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::Duplicate {
            field: "code".to_string(),
            value: "R01".to_string(),
        };
        assert_eq!(err.to_string(), "code 'R01' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
