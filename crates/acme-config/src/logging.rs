//! # Logging
//!
//! Structured logging setup for hosts embedding the pricing engine.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,acme_config=debug";

/// Installs a global `tracing` subscriber.
///
/// ## Filter
/// - `RUST_LOG` wins when set
/// - Otherwise [`DEFAULT_FILTER`]
///
/// Returns `false` if a global subscriber was already installed, so calling
/// this more than once is harmless.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_tracing();
        assert!(!init_tracing());
    }

    #[test]
    fn test_default_filter_targets_this_crate() {
        let crate_target = module_path!().split("::").next().unwrap();
        let directive = format!("{}=debug", crate_target);
        assert!(DEFAULT_FILTER.split(',').any(|d| d == directive));
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
