//! # Pricing Setup
//!
//! Owns the validated pricing collaborators and hands out baskets that
//! borrow them.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PricingConfig::load() ──► PricingSetup::from_config()                  │
//! │                                   │                                     │
//! │                     built once, read-only afterwards                    │
//! │                                   │                                     │
//! │            ┌──────────────────────┼──────────────────────┐              │
//! │            ▼                      ▼                      ▼              │
//! │      setup.basket()         setup.basket()         setup.price(..)      │
//! │      (checkout 1)           (checkout 2)           (one-shot)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `PricingSetup` is `Send + Sync`, so a single instance can be shared
//! behind an `Arc` by concurrent checkouts. Each basket stays confined to
//! its own session.

use std::path::PathBuf;

use acme_core::{Basket, CoreResult, DeliveryRules, InMemoryCatalogue, Offer, PriceBreakdown};
use tracing::{debug, info, warn};

use crate::config::PricingConfig;
use crate::error::ConfigResult;

/// Catalogue, delivery rules and offers built from one configuration.
#[derive(Debug)]
pub struct PricingSetup {
    catalogue: InMemoryCatalogue,
    delivery_rules: DeliveryRules,
    offers: Vec<Box<dyn Offer>>,
}

impl PricingSetup {
    /// Builds every pricing collaborator, failing on the first invalid rule.
    pub fn from_config(config: &PricingConfig) -> ConfigResult<Self> {
        config.validate()?;

        let setup = PricingSetup {
            catalogue: config.catalogue()?,
            delivery_rules: config.delivery_rules()?,
            offers: config.build_offers()?,
        };

        info!(
            products = setup.catalogue.len(),
            delivery_tiers = setup.delivery_rules.tiers().len(),
            offers = setup.offers.len(),
            "Pricing setup ready"
        );

        Ok(setup)
    }

    /// Loads configuration (see [`PricingConfig::load`]) and builds from it.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let config = PricingConfig::load(config_path)?;
        Self::from_config(&config)
    }

    /// Starts an empty basket priced with this setup.
    pub fn basket(&self) -> Basket<'_> {
        Basket::new(&self.catalogue, &self.delivery_rules, &self.offers)
    }

    /// Prices a list of product codes in one go.
    ///
    /// ## Errors
    /// The first unknown code aborts pricing with `ProductNotFound`.
    pub fn price<'c>(&self, codes: impl IntoIterator<Item = &'c str>) -> CoreResult<PriceBreakdown> {
        let mut basket = self.basket();

        for code in codes {
            if let Err(e) = basket.add(code) {
                warn!(code, error = %e, "Rejected basket item");
                return Err(e);
            }
        }

        let breakdown = basket.breakdown();
        debug!(
            items = breakdown.item_count,
            subtotal = %breakdown.subtotal,
            discount = %breakdown.total_discount,
            delivery = %breakdown.delivery,
            total = %breakdown.total,
            "Basket priced"
        );

        Ok(breakdown)
    }

    pub fn catalogue(&self) -> &InMemoryCatalogue {
        &self.catalogue
    }

    pub fn delivery_rules(&self) -> &DeliveryRules {
        &self.delivery_rules
    }

    pub fn offers(&self) -> &[Box<dyn Offer>] {
        &self.offers
    }
}
