//! # acme-config: Pricing Configuration & Setup
//!
//! Everything around the pure pricing engine that touches the outside world:
//! config files, environment variables and logging.
//!
//! ## Modules
//!
//! - [`config`] - `PricingConfig` (TOML + env overrides + validation)
//! - [`setup`] - `PricingSetup`, the built collaborators and basket factory
//! - [`logging`] - `tracing` subscriber initialization
//! - [`error`] - `ConfigError`
//!
//! ## Example Usage
//!
//! ```rust
//! use acme_config::{PricingConfig, PricingSetup};
//!
//! let setup = PricingSetup::from_config(&PricingConfig::default()).unwrap();
//!
//! let mut basket = setup.basket();
//! basket.add("B01").unwrap();
//! basket.add("G01").unwrap();
//!
//! assert_eq!(basket.total().to_string(), "$37.85");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod setup;

pub use config::{DeliverySettings, OfferConfig, PricingConfig};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_tracing;
pub use setup::PricingSetup;
