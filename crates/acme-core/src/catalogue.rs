//! # Catalogue
//!
//! The keyed product lookup the basket depends on.
//!
//! The basket only ever sees the [`Catalogue`] trait, so pricing can be tested
//! against [`InMemoryCatalogue`] or any stub without a real product backend.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::validation::{validate_price, validate_product_code, validate_product_name};

/// Read-only product lookup by code.
///
/// Implementations must be safe to share between baskets priced on
/// different threads.
pub trait Catalogue: Send + Sync {
    /// Returns a snapshot of the product with `code`.
    ///
    /// Fails with [`CoreError::ProductNotFound`] when the code is unknown.
    fn find(&self, code: &str) -> CoreResult<Product>;
}

/// Catalogue held entirely in memory, keyed by product code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    products: BTreeMap<String, Product>,
}

impl InMemoryCatalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalogue from products, rejecting duplicate codes.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{Catalogue, InMemoryCatalogue, Money, Product};
    ///
    /// let catalogue = InMemoryCatalogue::with_products([
    ///     Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap(),
    ///     Product::new("G01", "Green Widget", Money::from_cents(2495)).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(catalogue.find("G01").unwrap().price.cents(), 2495);
    /// assert!(catalogue.find("Z99").is_err());
    /// ```
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> CoreResult<Self> {
        let mut catalogue = Self::new();
        for product in products {
            catalogue.insert(product)?;
        }
        Ok(catalogue)
    }

    /// Adds a product after validating it.
    ///
    /// Products built through struct literals or deserialization skip
    /// `Product::new`, so the same rules are applied here.
    pub fn insert(&mut self, product: Product) -> CoreResult<()> {
        validate_product_code(&product.code)?;
        validate_product_name(&product.name)?;
        validate_price(product.price)?;

        if self.products.contains_key(&product.code) {
            return Err(CoreError::Validation(ValidationError::Duplicate {
                field: "code".to_string(),
                value: product.code,
            }));
        }

        self.products.insert(product.code.clone(), product);
        Ok(())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalogue has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    /// Checks whether `code` is known.
    pub fn contains(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }
}

impl Catalogue for InMemoryCatalogue {
    fn find(&self, code: &str) -> CoreResult<Product> {
        self.products
            .get(code)
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))
    }
}
