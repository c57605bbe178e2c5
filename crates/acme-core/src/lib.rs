//! # acme-core: Basket Pricing Engine
//!
//! Pure pricing logic: exact money, promotional offers, tiered delivery and
//! the basket that composes them. No I/O of any kind.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Acme Basket Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              acme-config (files, env, logging)                  │   │
//! │  │     PricingConfig ──► PricingSetup ──► Basket per checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acme-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ catalogue │  │  offers   │  │ delivery  │  │   │
//! │  │   │   Money   │  │ Catalogue │  │   Offer   │  │ Delivery  │  │   │
//! │  │   │           │  │  Product  │  │ BOGO/Bulk │  │   Rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                          basket::Basket                         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENV • PURE FUNCTIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Product and DiscountRate
//! - [`catalogue`] - Catalogue trait and in-memory implementation
//! - [`delivery`] - Tiered delivery charges
//! - [`offers`] - Offer trait and concrete discount policies
//! - [`basket`] - Basket aggregate and price breakdown
//! - [`error`] - Domain error types
//! - [`validation`] - Product and offer validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use acme_core::{
//!     Basket, BuyOneGetOneDiscounted, DeliveryRules, DeliveryTier, DiscountRate,
//!     InMemoryCatalogue, Money, Offer, Product,
//! };
//!
//! let catalogue = InMemoryCatalogue::with_products([
//!     Product::new("A", "Product A", "8.50".parse().unwrap()).unwrap(),
//!     Product::new("B", "Product B", "12.00".parse().unwrap()).unwrap(),
//!     Product::new("C", "Product C", "4.25".parse().unwrap()).unwrap(),
//! ])
//! .unwrap();
//!
//! let delivery = DeliveryRules::new(
//!     vec![
//!         DeliveryTier::new("20.00".parse().unwrap(), "4.95".parse().unwrap()),
//!         DeliveryTier::new("50.00".parse().unwrap(), "2.95".parse().unwrap()),
//!     ],
//!     Money::zero(),
//! )
//! .unwrap();
//!
//! let offers: Vec<Box<dyn Offer>> =
//!     vec![Box::new(BuyOneGetOneDiscounted::new("B", DiscountRate::HALF).unwrap())];
//!
//! let mut basket = Basket::new(&catalogue, &delivery, &offers);
//! for code in ["A", "B", "B", "C"] {
//!     basket.add(code).unwrap();
//! }
//!
//! assert_eq!(basket.total().to_string(), "$33.70");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalogue;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offers;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{AppliedOffer, Basket, PriceBreakdown};
pub use catalogue::{Catalogue, InMemoryCatalogue};
pub use delivery::{DeliveryRules, DeliveryTier};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, MAX_AMOUNT};
pub use offers::{BulkDiscount, BuyOneGetOneDiscounted, Offer};
pub use types::*;
