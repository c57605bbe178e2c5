//! # Delivery Rules
//!
//! Maps a discounted subtotal to a delivery charge through ordered tiers.
//!
//! ## Tier Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tiers: [ ≤ 20.00 → 4.95 ] [ ≤ 50.00 → 2.95 ]   fallback → 0.00          │
//! │                                                                         │
//! │  subtotal 12.00 ──► first tier            → 4.95                        │
//! │  subtotal 20.00 ──► first tier (bound is INCLUSIVE) → 4.95              │
//! │  subtotal 20.01 ──► second tier           → 2.95                        │
//! │  subtotal 50.01 ──► no tier matches       → fallback 0.00               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Upper bounds are inclusive: a subtotal exactly equal to a bound is charged
//! at that tier. Tier order is checked once, in [`DeliveryRules::new`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// One delivery tier: subtotals up to and including `upper_bound` pay `charge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTier {
    pub upper_bound: Money,
    pub charge: Money,
}

impl DeliveryTier {
    pub const fn new(upper_bound: Money, charge: Money) -> Self {
        DeliveryTier {
            upper_bound,
            charge,
        }
    }

    /// Checks whether `subtotal` falls in this tier (inclusive bound).
    #[inline]
    pub fn covers(&self, subtotal: Money) -> bool {
        subtotal <= self.upper_bound
    }
}

/// Validated, immutable delivery pricing policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryRules {
    tiers: Vec<DeliveryTier>,
    fallback: Money,
}

impl DeliveryRules {
    /// Creates delivery rules, failing fast on misconfiguration.
    ///
    /// ## Rules
    /// - Tier bounds strictly ascending
    /// - Bounds and charges non-negative
    /// - Fallback charge non-negative
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{DeliveryRules, DeliveryTier, Money};
    ///
    /// let rules = DeliveryRules::new(
    ///     vec![
    ///         DeliveryTier::new(Money::from_cents(2000), Money::from_cents(495)),
    ///         DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
    ///     ],
    ///     Money::zero(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(rules.calculate(Money::from_cents(2000)).cents(), 495);
    /// assert_eq!(rules.calculate(Money::from_cents(3075)).cents(), 295);
    /// assert_eq!(rules.calculate(Money::from_cents(9000)).cents(), 0);
    /// ```
    pub fn new(tiers: Vec<DeliveryTier>, fallback: Money) -> CoreResult<Self> {
        if fallback.is_negative() {
            return Err(CoreError::InvalidDeliveryRules(format!(
                "fallback charge {} is negative",
                fallback
            )));
        }

        for (index, tier) in tiers.iter().enumerate() {
            if tier.upper_bound.is_negative() {
                return Err(CoreError::InvalidDeliveryRules(format!(
                    "tier {} has negative upper bound {}",
                    index, tier.upper_bound
                )));
            }
            if tier.charge.is_negative() {
                return Err(CoreError::InvalidDeliveryRules(format!(
                    "tier {} has negative charge {}",
                    index, tier.charge
                )));
            }
        }

        if let Some(index) = tiers
            .windows(2)
            .position(|pair| pair[1].upper_bound <= pair[0].upper_bound)
        {
            return Err(CoreError::InvalidDeliveryRules(format!(
                "tier bounds must be strictly ascending: {} is followed by {}",
                tiers[index].upper_bound,
                tiers[index + 1].upper_bound
            )));
        }

        Ok(DeliveryRules { tiers, fallback })
    }

    /// Delivery is always free.
    pub fn free() -> Self {
        DeliveryRules {
            tiers: Vec::new(),
            fallback: Money::zero(),
        }
    }

    /// Same charge regardless of subtotal.
    pub fn flat(charge: Money) -> CoreResult<Self> {
        Self::new(Vec::new(), charge)
    }

    /// Returns the delivery charge for a discounted subtotal.
    ///
    /// The first tier whose bound covers the subtotal wins; if none does the
    /// fallback applies.
    pub fn calculate(&self, subtotal: Money) -> Money {
        self.tiers
            .iter()
            .find(|tier| tier.covers(subtotal))
            .map_or(self.fallback, |tier| tier.charge)
    }

    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }

    pub fn fallback(&self) -> Money {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    fn standard_rules() -> DeliveryRules {
        DeliveryRules::new(
            vec![
                DeliveryTier::new(money("20.00"), money("4.95")),
                DeliveryTier::new(money("50.00"), money("2.95")),
            ],
            Money::zero(),
        )
        .unwrap()
    }

    #[test]
    fn test_tier_lookup() {
        let rules = standard_rules();
        assert_eq!(rules.calculate(money("0.00")), money("4.95"));
        assert_eq!(rules.calculate(money("19.99")), money("4.95"));
        assert_eq!(rules.calculate(money("30.75")), money("2.95"));
        assert_eq!(rules.calculate(money("50.01")), Money::zero());
        assert_eq!(rules.calculate(money("1000.00")), Money::zero());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let rules = standard_rules();
        assert_eq!(rules.calculate(money("20.00")), money("4.95"));
        assert_eq!(rules.calculate(money("20.01")), money("2.95"));
        assert_eq!(rules.calculate(money("50.00")), money("2.95"));
    }

    #[test]
    fn test_negative_subtotal_falls_in_first_tier() {
        let rules = standard_rules();
        assert_eq!(rules.calculate(money("-5.00")), money("4.95"));
    }

    #[test]
    fn test_descending_tiers_rejected() {
        let result = DeliveryRules::new(
            vec![
                DeliveryTier::new(money("50.00"), money("2.95")),
                DeliveryTier::new(money("20.00"), money("4.95")),
            ],
            Money::zero(),
        );
        assert!(matches!(result, Err(CoreError::InvalidDeliveryRules(_))));
    }

    #[test]
    fn test_duplicate_bounds_rejected() {
        let result = DeliveryRules::new(
            vec![
                DeliveryTier::new(money("20.00"), money("4.95")),
                DeliveryTier::new(money("20.00"), money("2.95")),
            ],
            Money::zero(),
        );
        assert!(matches!(result, Err(CoreError::InvalidDeliveryRules(_))));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(DeliveryRules::new(vec![], money("-1.00")).is_err());
        assert!(DeliveryRules::new(
            vec![DeliveryTier::new(money("20.00"), money("-4.95"))],
            Money::zero()
        )
        .is_err());
        assert!(DeliveryRules::new(
            vec![DeliveryTier::new(money("-20.00"), money("4.95"))],
            Money::zero()
        )
        .is_err());
    }

    #[test]
    fn test_free_and_flat() {
        assert_eq!(DeliveryRules::free().calculate(money("12.00")), Money::zero());
        let flat = DeliveryRules::flat(money("3.50")).unwrap();
        assert_eq!(flat.calculate(money("0.00")), money("3.50"));
        assert_eq!(flat.calculate(money("500.00")), money("3.50"));
    }
}
