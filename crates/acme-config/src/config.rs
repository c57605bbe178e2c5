//! # Pricing Configuration
//!
//! Catalogue, delivery tiers and offers as data.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ACME_DELIVERY_FALLBACK=0.00                                        │
//! │     ACME_OFFERS_ENABLED=false                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, else $ACME_PRICING_CONFIG, else                     │
//! │     ~/.config/basket/pricing.toml (Linux)                              │
//! │     ~/Library/Application Support/com.acme.basket/pricing.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Acme Widget Co catalogue, tiers and red widget offer               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! offers_enabled = true
//!
//! [[products]]
//! code = "R01"
//! name = "Red Widget"
//! price = "32.95"
//!
//! [delivery]
//! fallback = "0.00"
//! tiers = [
//!     { upper_bound = "49.99", charge = "4.95" },
//!     { upper_bound = "89.99", charge = "2.95" },
//! ]
//!
//! [[offers]]
//! kind = "buy_one_get_one_discounted"
//! product_code = "R01"
//! discount_bps = 5000
//! ```
//!
//! Amounts are always quoted decimal strings so they never pass through a
//! float.

use std::path::PathBuf;

use acme_core::{
    BulkDiscount, BuyOneGetOneDiscounted, CoreResult, DeliveryRules, DeliveryTier, DiscountRate,
    InMemoryCatalogue, Money, Offer, Product,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "ACME_PRICING_CONFIG";

/// Env var overriding the delivery fallback charge.
pub const DELIVERY_FALLBACK_ENV: &str = "ACME_DELIVERY_FALLBACK";

/// Env var switching all offers on or off.
pub const OFFERS_ENABLED_ENV: &str = "ACME_OFFERS_ENABLED";

// =============================================================================
// Delivery Settings
// =============================================================================

/// Delivery tiers as configured. Checked by [`DeliveryRules::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySettings {
    /// Charge for subtotals above every tier.
    #[serde(default)]
    pub fallback: Money,

    /// Tiers in ascending `upper_bound` order (bounds are inclusive).
    #[serde(default)]
    pub tiers: Vec<DeliveryTier>,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        DeliverySettings {
            fallback: Money::zero(),
            tiers: vec![
                DeliveryTier::new(Money::from_cents(4999), Money::from_cents(495)),
                DeliveryTier::new(Money::from_cents(8999), Money::from_cents(295)),
            ],
        }
    }
}

impl DeliverySettings {
    pub fn build(&self) -> CoreResult<DeliveryRules> {
        DeliveryRules::new(self.tiers.clone(), self.fallback)
    }
}

// =============================================================================
// Offer Settings
// =============================================================================

/// One configured offer, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OfferConfig {
    /// Every second `product_code` item is `discount_bps` off.
    BuyOneGetOneDiscounted {
        product_code: String,
        discount_bps: u32,
    },

    /// `discount_bps` off every `product_code` item once `min_quantity` are present.
    BulkDiscount {
        product_code: String,
        min_quantity: usize,
        discount_bps: u32,
    },
}

impl OfferConfig {
    pub fn product_code(&self) -> &str {
        match self {
            OfferConfig::BuyOneGetOneDiscounted { product_code, .. }
            | OfferConfig::BulkDiscount { product_code, .. } => product_code,
        }
    }

    /// Builds the offer policy, validating its parameters.
    pub fn build(&self) -> CoreResult<Box<dyn Offer>> {
        let offer: Box<dyn Offer> = match self {
            OfferConfig::BuyOneGetOneDiscounted {
                product_code,
                discount_bps,
            } => Box::new(BuyOneGetOneDiscounted::new(
                product_code.clone(),
                DiscountRate::try_from_bps(*discount_bps)?,
            )?),
            OfferConfig::BulkDiscount {
                product_code,
                min_quantity,
                discount_bps,
            } => Box::new(BulkDiscount::new(
                product_code.clone(),
                *min_quantity,
                DiscountRate::try_from_bps(*discount_bps)?,
            )?),
        };
        Ok(offer)
    }
}

// =============================================================================
// Defaults
// =============================================================================

fn default_products() -> Vec<Product> {
    vec![
        Product {
            code: "R01".to_string(),
            name: "Red Widget".to_string(),
            price: Money::from_cents(3295),
        },
        Product {
            code: "G01".to_string(),
            name: "Green Widget".to_string(),
            price: Money::from_cents(2495),
        },
        Product {
            code: "B01".to_string(),
            name: "Blue Widget".to_string(),
            price: Money::from_cents(795),
        },
    ]
}

fn default_offers() -> Vec<OfferConfig> {
    vec![OfferConfig::BuyOneGetOneDiscounted {
        product_code: "R01".to_string(),
        discount_bps: DiscountRate::HALF.bps(),
    }]
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Main Pricing Configuration
// =============================================================================

/// Complete pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// When false, offers are kept in the file but none are applied.
    #[serde(default = "default_true")]
    pub offers_enabled: bool,

    /// Catalogue contents.
    #[serde(default = "default_products")]
    pub products: Vec<Product>,

    /// Delivery tiers.
    #[serde(default)]
    pub delivery: DeliverySettings,

    /// Promotional offers.
    #[serde(default = "default_offers")]
    pub offers: Vec<OfferConfig>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            offers_enabled: true,
            products: default_products(),
            delivery: DeliverySettings::default(),
            offers: default_offers(),
        }
    }
}

impl PricingConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else `$ACME_PRICING_CONFIG`, else the
    ///    platform config directory)
    /// 3. Environment variables
    ///
    /// An explicitly named file that does not exist is an error; a missing
    /// file in the platform directory just means defaults.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let explicit = config_path.or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match (explicit, Self::default_config_path()) {
            (Some(path), _) => {
                if !path.exists() {
                    return Err(ConfigError::ConfigLoadFailed(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                Self::read_file(&path)?
            }
            (None, Some(path)) if path.exists() => Self::read_file(&path)?,
            (None, path) => {
                debug!(?path, "Pricing config file not found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses and validates a TOML document. Environment is not consulted.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: PricingConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save(&self, path: &std::path::Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::ConfigSaveFailed(e.to_string()))?;

        info!(path = %path.display(), "Pricing config saved");
        Ok(())
    }

    /// Validates the configuration by building every pricing rule once.
    ///
    /// ## Checks
    /// - Every product is valid and codes are unique
    /// - Delivery tiers are ascending with non-negative amounts
    /// - Every offer is valid and targets a product in the catalogue
    pub fn validate(&self) -> ConfigResult<()> {
        let catalogue = self.catalogue()?;
        self.delivery_rules()?;

        for offer in &self.offers {
            offer.build()?;
            if !catalogue.contains(offer.product_code()) {
                return Err(ConfigError::InvalidConfig(format!(
                    "offer targets unknown product code '{}'",
                    offer.product_code()
                )));
            }
        }

        Ok(())
    }

    /// Builds the catalogue.
    pub fn catalogue(&self) -> ConfigResult<InMemoryCatalogue> {
        Ok(InMemoryCatalogue::with_products(self.products.iter().cloned())?)
    }

    /// Builds the delivery rules.
    pub fn delivery_rules(&self) -> ConfigResult<DeliveryRules> {
        Ok(self.delivery.build()?)
    }

    /// Builds the active offers (none when offers are disabled).
    pub fn build_offers(&self) -> ConfigResult<Vec<Box<dyn Offer>>> {
        if !self.offers_enabled {
            return Ok(Vec::new());
        }

        self.offers
            .iter()
            .map(|offer| offer.build().map_err(ConfigError::from))
            .collect()
    }

    fn read_file(path: &std::path::Path) -> ConfigResult<Self> {
        info!(path = %path.display(), "Loading pricing config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(DELIVERY_FALLBACK_ENV) {
            match Money::parse(&value) {
                Ok(fallback) => {
                    debug!(fallback = %fallback, "Overriding delivery fallback from environment");
                    self.delivery.fallback = fallback;
                }
                Err(e) => warn!(value = %value, error = %e, "Ignoring invalid delivery fallback"),
            }
        }

        if let Ok(value) = std::env::var(OFFERS_ENABLED_ENV) {
            match parse_flag(&value) {
                Some(enabled) => {
                    debug!(enabled, "Overriding offers_enabled from environment");
                    self.offers_enabled = enabled;
                }
                None => warn!(value = %value, "Ignoring invalid offers flag"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "acme", "basket")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
