//! # Basket
//!
//! Orchestrates catalogue lookup, offers and delivery into one total.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Basket::total()                                 │
//! │                                                                         │
//! │  1. subtotal            = Σ item.price                                  │
//! │  2. total_discount      = Σ offer.apply(items)                          │
//! │  3. discounted_subtotal = max(subtotal - total_discount, 0)             │
//! │  4. delivery            = DeliveryRules.calculate(discounted_subtotal)  │
//! │  5. total               = discounted_subtotal + delivery                │
//! │                                                                         │
//! │  Pure: no step mutates the basket, so total() is idempotent.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The basket owns its item list and nothing else. The catalogue, delivery
//! rules and offers are borrowed read-only, so one set of collaborators can
//! back any number of baskets.

use serde::Serialize;

use crate::catalogue::Catalogue;
use crate::delivery::DeliveryRules;
use crate::error::CoreResult;
use crate::money::Money;
use crate::offers::Offer;
use crate::types::Product;
use crate::validation::validate_price;

/// A discount one offer contributed to a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedOffer {
    pub name: String,
    pub discount: Money,
}

/// Every intermediate amount of a basket price calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub item_count: usize,
    pub subtotal: Money,
    /// Offers that produced a non-zero discount, in configured order.
    pub discounts: Vec<AppliedOffer>,
    pub total_discount: Money,
    pub discounted_subtotal: Money,
    pub delivery: Money,
    pub total: Money,
}

/// A single checkout session's items plus the pricing rules to apply.
///
/// ## Usage
/// ```rust
/// use acme_core::{
///     Basket, BuyOneGetOneDiscounted, DeliveryRules, DeliveryTier, DiscountRate,
///     InMemoryCatalogue, Money, Offer, Product,
/// };
///
/// let catalogue = InMemoryCatalogue::with_products([
///     Product::new("A", "Apple", Money::from_cents(850)).unwrap(),
///     Product::new("B", "Banana", Money::from_cents(1200)).unwrap(),
/// ])
/// .unwrap();
/// let delivery = DeliveryRules::new(
///     vec![DeliveryTier::new(Money::from_cents(2000), Money::from_cents(495))],
///     Money::zero(),
/// )
/// .unwrap();
/// let offers: Vec<Box<dyn Offer>> =
///     vec![Box::new(BuyOneGetOneDiscounted::new("B", DiscountRate::HALF).unwrap())];
///
/// let mut basket = Basket::new(&catalogue, &delivery, &offers);
/// basket.add("B").unwrap();
/// basket.add("B").unwrap();
///
/// // 24.00 - 6.00 = 18.00, + 4.95 delivery
/// assert_eq!(basket.total().cents(), 2295);
/// ```
pub struct Basket<'a> {
    catalogue: &'a dyn Catalogue,
    delivery_rules: &'a DeliveryRules,
    offers: &'a [Box<dyn Offer>],
    items: Vec<Product>,
}

impl<'a> Basket<'a> {
    /// Creates an empty basket priced with the given collaborators.
    pub fn new(
        catalogue: &'a dyn Catalogue,
        delivery_rules: &'a DeliveryRules,
        offers: &'a [Box<dyn Offer>],
    ) -> Self {
        Basket {
            catalogue,
            delivery_rules,
            offers,
            items: Vec::new(),
        }
    }

    /// Looks up `product_code` and appends the product.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`](crate::CoreError::ProductNotFound) from
    /// the catalogue, unmodified. A price outside `0..=MAX_AMOUNT` from a
    /// catalogue that skipped validation is rejected as well. Either way the
    /// basket is left unchanged.
    pub fn add(&mut self, product_code: &str) -> CoreResult<()> {
        let product = self.catalogue.find(product_code)?;
        validate_price(product.price)?;
        self.items.push(product);
        Ok(())
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all items; the pricing rules stay attached.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of item prices before offers and delivery.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |sum, item| sum + item.price)
    }

    /// Computes every step of the price.
    ///
    /// A discount larger than the subtotal clamps the discounted subtotal at
    /// zero; delivery is then priced as for an empty basket.
    pub fn breakdown(&self) -> PriceBreakdown {
        let subtotal = self.subtotal();

        let discounts: Vec<AppliedOffer> = self
            .offers
            .iter()
            .map(|offer| AppliedOffer {
                name: offer.name().to_string(),
                discount: offer.apply(&self.items),
            })
            .filter(|applied| !applied.discount.is_zero())
            .collect();

        let total_discount: Money = discounts.iter().map(|applied| applied.discount).sum();
        let discounted_subtotal = (subtotal - total_discount).clamp_non_negative();
        let delivery = self.delivery_rules.calculate(discounted_subtotal);

        PriceBreakdown {
            item_count: self.items.len(),
            subtotal,
            discounts,
            total_discount,
            discounted_subtotal,
            delivery,
            total: discounted_subtotal + delivery,
        }
    }

    /// Grand total: discounted subtotal plus delivery.
    pub fn total(&self) -> Money {
        self.breakdown().total
    }
}

impl std::fmt::Debug for Basket<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Basket")
            .field("items", &self.items)
            .field("delivery_rules", &self.delivery_rules)
            .field("offers", &self.offers)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::InMemoryCatalogue;
    use crate::delivery::DeliveryTier;
    use crate::error::{CoreError, ValidationError};
    use crate::money::MAX_AMOUNT;
    use crate::offers::{BulkDiscount, BuyOneGetOneDiscounted};
    use crate::types::DiscountRate;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    fn catalogue() -> InMemoryCatalogue {
        InMemoryCatalogue::with_products([
            Product::new("A", "Product A", money("8.50")).unwrap(),
            Product::new("B", "Product B", money("12.00")).unwrap(),
            Product::new("C", "Product C", money("4.25")).unwrap(),
        ])
        .unwrap()
    }

    fn delivery() -> DeliveryRules {
        DeliveryRules::new(
            vec![
                DeliveryTier::new(money("20.00"), money("4.95")),
                DeliveryTier::new(money("50.00"), money("2.95")),
            ],
            Money::zero(),
        )
        .unwrap()
    }

    fn no_offers() -> Vec<Box<dyn Offer>> {
        Vec::new()
    }

    fn second_b_half_price() -> Box<dyn Offer> {
        Box::new(BuyOneGetOneDiscounted::new("B", DiscountRate::HALF).unwrap())
    }

    /// Offer that always gives a fixed amount off.
    #[derive(Debug)]
    struct FixedDiscount(Money);

    impl Offer for FixedDiscount {
        fn name(&self) -> &str {
            "fixed"
        }

        fn apply(&self, _items: &[Product]) -> Money {
            self.0
        }
    }

    #[test]
    fn test_worked_example() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers = vec![second_b_half_price()];
        let mut basket = Basket::new(&catalogue, &delivery, &offers);

        for code in ["A", "B", "B", "C"] {
            basket.add(code).unwrap();
        }

        let breakdown = basket.breakdown();
        assert_eq!(breakdown.subtotal, money("36.75"));
        assert_eq!(breakdown.total_discount, money("6.00"));
        assert_eq!(breakdown.discounted_subtotal, money("30.75"));
        assert_eq!(breakdown.delivery, money("2.95"));
        assert_eq!(breakdown.total, money("33.70"));
        assert_eq!(basket.total(), money("33.70"));
    }

    #[test]
    fn test_empty_basket_pays_first_tier() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers = vec![second_b_half_price()];
        let basket = Basket::new(&catalogue, &delivery, &offers);

        assert!(basket.is_empty());
        assert_eq!(basket.total(), delivery.calculate(Money::zero()));
        assert_eq!(basket.total(), money("4.95"));
    }

    #[test]
    fn test_unknown_code_propagates_and_leaves_basket_unchanged() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers = no_offers();
        let mut basket = Basket::new(&catalogue, &delivery, &offers);

        basket.add("A").unwrap();
        let err = basket.add("Z").unwrap_err();

        assert_eq!(err, CoreError::ProductNotFound("Z".to_string()));
        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers = no_offers();
        let mut basket = Basket::new(&catalogue, &delivery, &offers);

        for code in ["C", "A", "B", "A"] {
            basket.add(code).unwrap();
        }

        let codes: Vec<&str> = basket.items().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["C", "A", "B", "A"]);
    }

    #[test]
    fn test_total_is_idempotent() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers = vec![second_b_half_price()];
        let mut basket = Basket::new(&catalogue, &delivery, &offers);
        for code in ["B", "B", "C"] {
            basket.add(code).unwrap();
        }

        let first = basket.total();
        for _ in 0..10 {
            assert_eq!(basket.total(), first);
        }
        assert_eq!(basket.len(), 3);
    }

    #[test]
    fn test_no_offers_means_subtotal_plus_delivery() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers = no_offers();
        let mut basket = Basket::new(&catalogue, &delivery, &offers);
        for code in ["A", "B", "B", "C"] {
            basket.add(code).unwrap();
        }

        let subtotal = basket.subtotal();
        assert_eq!(basket.total(), subtotal + delivery.calculate(subtotal));
        assert!(basket.breakdown().discounts.is_empty());
    }

    #[test]
    fn test_offer_order_does_not_matter() {
        let catalogue = catalogue();
        let delivery = delivery();
        let forward: Vec<Box<dyn Offer>> = vec![
            second_b_half_price(),
            Box::new(BulkDiscount::new("A", 2, DiscountRate::from_bps(1000)).unwrap()),
        ];
        let reversed: Vec<Box<dyn Offer>> = vec![
            Box::new(BulkDiscount::new("A", 2, DiscountRate::from_bps(1000)).unwrap()),
            second_b_half_price(),
        ];

        let codes = ["A", "B", "A", "B", "C"];
        let mut first = Basket::new(&catalogue, &delivery, &forward);
        let mut second = Basket::new(&catalogue, &delivery, &reversed);
        for code in codes {
            first.add(code).unwrap();
            second.add(code).unwrap();
        }

        assert_eq!(first.total(), second.total());
        assert_eq!(first.breakdown().total_discount, money("7.70"));
    }

    #[test]
    fn test_delivery_uses_discounted_subtotal_at_boundary() {
        let catalogue = catalogue();
        let delivery = delivery();
        // A + B = 20.50; 0.50 off lands exactly on the 20.00 bound
        let offers: Vec<Box<dyn Offer>> = vec![Box::new(FixedDiscount(money("0.50")))];
        let mut basket = Basket::new(&catalogue, &delivery, &offers);
        basket.add("A").unwrap();
        basket.add("B").unwrap();

        let breakdown = basket.breakdown();
        assert_eq!(breakdown.discounted_subtotal, money("20.00"));
        assert_eq!(breakdown.delivery, money("4.95"));
        assert_eq!(breakdown.total, money("24.95"));
    }

    #[test]
    fn test_discount_exceeding_subtotal_clamps_at_zero() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers: Vec<Box<dyn Offer>> = vec![Box::new(FixedDiscount(money("100.00")))];
        let mut basket = Basket::new(&catalogue, &delivery, &offers);
        basket.add("C").unwrap();

        let breakdown = basket.breakdown();
        assert_eq!(breakdown.total_discount, money("100.00"));
        assert_eq!(breakdown.discounted_subtotal, Money::zero());
        assert_eq!(breakdown.total, money("4.95"));
    }

    #[test]
    fn test_sub_cent_prices_sum_exactly() {
        let catalogue = InMemoryCatalogue::with_products([
            Product::new("X", "Ten", money("0.10")).unwrap(),
            Product::new("Y", "Twenty", money("0.20")).unwrap(),
            Product::new("Z", "Thirty", money("0.30")).unwrap(),
        ])
        .unwrap();
        let delivery = DeliveryRules::free();
        let offers = no_offers();
        let mut basket = Basket::new(&catalogue, &delivery, &offers);
        for code in ["X", "Y", "Z"] {
            basket.add(code).unwrap();
        }

        assert_eq!(basket.subtotal(), money("0.60"));
        assert_eq!(basket.total(), money("0.60"));
    }

    #[test]
    fn test_clear() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers = no_offers();
        let mut basket = Basket::new(&catalogue, &delivery, &offers);
        basket.add("A").unwrap();
        basket.clear();

        assert!(basket.is_empty());
        assert_eq!(basket.total(), money("4.95"));
    }

    #[test]
    fn test_breakdown_lists_only_applied_offers() {
        let catalogue = catalogue();
        let delivery = delivery();
        let offers: Vec<Box<dyn Offer>> = vec![
            second_b_half_price(),
            Box::new(BulkDiscount::new("C", 5, DiscountRate::from_bps(2000)).unwrap()),
        ];
        let mut basket = Basket::new(&catalogue, &delivery, &offers);
        basket.add("B").unwrap();
        basket.add("B").unwrap();

        let breakdown = basket.breakdown();
        assert_eq!(breakdown.discounts.len(), 1);
        assert_eq!(breakdown.discounts[0].name, offers[0].name());
        assert_eq!(breakdown.discounts[0].discount, money("6.00"));
    }

    /// Catalogue that hands out whatever price it was built with.
    struct FixedPriceCatalogue(Money);

    impl Catalogue for FixedPriceCatalogue {
        fn find(&self, code: &str) -> CoreResult<Product> {
            Ok(Product {
                code: code.to_string(),
                name: "Anything".to_string(),
                price: self.0,
            })
        }
    }

    #[test]
    fn test_max_priced_items_total_without_overflow() {
        let catalogue = FixedPriceCatalogue(MAX_AMOUNT);
        let delivery = delivery();
        let offers = no_offers();
        let mut basket = Basket::new(&catalogue, &delivery, &offers);

        basket.add("X").unwrap();
        basket.add("X").unwrap();

        assert_eq!(basket.total().cents(), MAX_AMOUNT.cents() * 2);
    }

    #[test]
    fn test_add_rejects_out_of_range_price() {
        let catalogue = FixedPriceCatalogue(Money::from_cents(i64::MAX));
        let delivery = delivery();
        let offers = no_offers();
        let mut basket = Basket::new(&catalogue, &delivery, &offers);

        let err = basket.add("X").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert!(basket.is_empty());
        assert_eq!(basket.total(), money("4.95"));
    }
}
