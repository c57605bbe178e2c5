//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.10 + 0.20 + 0.30 = 0.6000000000000001  ❌ WRONG!                   │
//! │                                                                         │
//! │  A basket sums N prices, subtracts M discounts and adds a delivery     │
//! │  charge. Each float operation can drift by a fraction of a cent.       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 20 + 30 = 60 cents, exactly, every time                        │
//! │    Rounding happens in ONE place: `Money::apply_rate`                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::money::Money;
//!
//! // Parse from a decimal literal (preferred for configuration)
//! let price: Money = "32.95".parse().unwrap();
//! assert_eq!(price.cents(), 3295);
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(495);
//! assert_eq!(total.to_string(), "$37.90");
//!
//! // Too much precision is rejected, never rounded
//! assert!(Money::parse("1.999").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::DiscountRate;

/// Number of fractional digits the currency supports.
pub const MINOR_DIGITS: usize = 2;

/// Minor units per major unit (10^MINOR_DIGITS).
const MINOR_PER_MAJOR: i64 = 100;

/// Largest magnitude accepted from input: 10,000,000,000.00.
///
/// Parsed amounts and catalogue prices are held to this bound, so a basket
/// would need millions of maximum-priced items before its `i64` sum could
/// overflow.
pub const MAX_AMOUNT: Money = Money(1_000_000_000_000);

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values (a discount may exceed a price)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde as decimal string**: `"36.75"` in TOML/JSON, never a float
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► Basket subtotal ──┬──► discounted subtotal ──► total │
/// │                                      │             │                    │
/// │  Offer.apply() ──► discounts ────────┘             ▼                    │
/// │                                        DeliveryRules.calculate()        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let price = Money::from_cents(850); // Represents 8.50
    /// assert_eq!(price.cents(), 850);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal literal such as `"12.00"`, `"4.5"` or `"-3"`.
    ///
    /// ## Rules
    /// - Optional leading `-`, then at least one digit
    /// - Optional `.` followed by 1 to [`MINOR_DIGITS`] digits
    /// - Surrounding whitespace is ignored
    /// - Magnitude at most [`MAX_AMOUNT`]
    ///
    /// Anything else fails with [`CoreError::InvalidAmount`]. Extra precision
    /// is an error, never silently rounded or truncated.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// assert_eq!(Money::parse("4.25").unwrap().cents(), 425);
    /// assert_eq!(Money::parse("4.5").unwrap().cents(), 450);
    /// assert!(Money::parse("4.255").is_err());
    /// assert!(Money::parse("four").is_err());
    /// ```
    pub fn parse(input: &str) -> CoreResult<Money> {
        let text = input.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (major_digits, minor_digits) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (unsigned, None),
        };

        if major_digits.is_empty() || !major_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::invalid_amount(
                input,
                "expected a decimal number such as 12.50",
            ));
        }

        let minor = match minor_digits {
            None => 0,
            Some(digits) => {
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(CoreError::invalid_amount(
                        input,
                        "expected digits after the decimal point",
                    ));
                }
                if digits.len() > MINOR_DIGITS {
                    return Err(CoreError::invalid_amount(
                        input,
                        format!("at most {} fractional digits allowed", MINOR_DIGITS),
                    ));
                }
                // "4.5" means 50 cents, not 5
                let value: i64 = digits
                    .parse()
                    .map_err(|_| CoreError::invalid_amount(input, "invalid fractional part"))?;
                value * 10_i64.pow((MINOR_DIGITS - digits.len()) as u32)
            }
        };

        let cents = major_digits
            .parse::<i64>()
            .ok()
            .and_then(|major| major.checked_mul(MINOR_PER_MAJOR))
            .and_then(|cents| cents.checked_add(minor))
            .filter(|cents| *cents <= MAX_AMOUNT.0)
            .ok_or_else(|| {
                CoreError::invalid_amount(
                    input,
                    format!("amount must not exceed {}", MAX_AMOUNT.to_decimal_string()),
                )
            })?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value, the additive identity.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.cents(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies the amount by a rate, rounding half away from zero.
    ///
    /// ## Rounding
    /// This is the ONLY rounding step in the pricing pipeline. Offers use it
    /// to turn "half price" into a whole number of cents:
    /// ```text
    ///   32.95 × 50% = 16.475 → 16.48
    ///    7.95 × 50% =  3.975 →  3.98
    /// ```
    ///
    /// ## Implementation
    /// Integer math in i128: `(cents * bps ± 5000) / 10000`
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    /// use acme_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(3295);
    /// let half = price.apply_rate(DiscountRate::from_bps(5000));
    /// assert_eq!(half.cents(), 1648);
    /// ```
    pub fn apply_rate(&self, rate: DiscountRate) -> Money {
        let scaled = self.0 as i128 * rate.bps() as i128;
        let rounded = if scaled >= 0 {
            (scaled + 5000) / 10000
        } else {
            (scaled - 5000) / 10000
        };
        Money(rounded as i64)
    }

    /// Returns the larger of `self` and zero.
    #[inline]
    pub fn clamp_non_negative(self) -> Money {
        self.max(Money::zero())
    }

    /// Formats the amount without a currency symbol (`"-5.50"`).
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}.{:0width$}",
            sign,
            self.major().abs(),
            self.minor(),
            width = MINOR_DIGITS
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a currency symbol (`$36.75`, `-$5.50`).
///
/// ## Note
/// Callers are responsible for localized display; this is for logs and
/// receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:0width$}",
            sign,
            self.major().abs(),
            self.minor(),
            width = MINOR_DIGITS
        )
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl TryFrom<String> for Money {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Money::parse(&value)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_decimal_string()
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Folds with `+` starting from [`Money::zero`].
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |sum, money| sum + money)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
