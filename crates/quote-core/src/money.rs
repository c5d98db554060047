//! # Money Module
//!
//! Provides the `Rupees` type for monetary values on a quotation.
//!
//! ## Precision Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AMOUNTS CARRY FULL PRECISION, DISPLAY ROUNDS                           │
//! │                                                                         │
//! │  Taxable 317.25 × 9%  = 28.5525        (kept as-is, no paise rounding) │
//! │  Grand total          = 374.355        (kept as-is)                    │
//! │                                                                         │
//! │  Document / preview   = ₹374.36        (2 decimals, only at display)   │
//! │  Amount in words      = floor(374.355) = 374                           │
//! │                                                                         │
//! │  The persisted "Total Cost" and "GST" fields receive the unrounded     │
//! │  values verbatim.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion
//! Anything that is not a finite number becomes zero. A malformed quantity
//! or rate must never abort a whole quotation, so there is no error path.
//!
//! Arithmetic on amounts that are already finite saturates instead: a sum or
//! product that overflows clamps to `±f64::MAX`, so an absurdly large
//! quotation stays absurdly large rather than totalling zero.
//!
//! ```rust
//! use quote_core::money::{coerce_number, Rupees};
//!
//! assert_eq!(coerce_number(" 3 "), 3.0);
//! assert_eq!(coerce_number("abc"), 0.0);
//! assert_eq!(Rupees::new(f64::NAN), Rupees::zero());
//! assert_eq!(Rupees::new(374.355).to_string(), "₹374.36");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::types::TaxRate;
use crate::CURRENCY_SYMBOL;

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Returns `value` when it is finite, zero otherwise.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamps an arithmetic result: overflow to `±f64::MAX`, `NaN` to zero.
#[inline]
fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}

/// Coerces free-form numeric input (a quantity box, a rate cell) to a number.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty input is `0`
/// - Unparsable input is `0`
/// - `NaN` / infinities are `0`
pub fn coerce_number(input: &str) -> f64 {
    let input = input.trim();
    if input.is_empty() {
        return 0.0;
    }
    input.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

// =============================================================================
// Rupees Type
// =============================================================================

/// A monetary value in rupees.
///
/// ## Design Decisions
/// - **f64 (signed)**: negative discounts can push amounts either way
/// - **Always finite**: input funnels through [`finite_or_zero`], arithmetic
///   saturates at `±f64::MAX`
/// - **Transparent serde**: serializes as a bare JSON number
///
/// ## Where Rupees Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.unit_rate × quantity ──► amount ──► Σ subtotal               │
/// │                                                  │                      │
/// │                              discount ◄──────────┤                      │
/// │                                                  ▼                      │
/// │                          taxable ──► CGST + SGST ──► grand total        │
/// │                                                         │               │
/// │                             "Total Cost" field ◄────────┤               │
/// │                             ₹374.36 on document ◄───────┘               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(f64);

impl Rupees {
    /// Creates an amount, coercing non-finite input to zero.
    #[inline]
    pub fn new(value: f64) -> Self {
        Rupees(finite_or_zero(value))
    }

    /// Zero rupees.
    #[inline]
    pub const fn zero() -> Self {
        Rupees(0.0)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Rupees(self.0.abs())
    }

    /// Whole rupees, rounded toward negative infinity.
    ///
    /// ```rust
    /// use quote_core::money::Rupees;
    ///
    /// assert_eq!(Rupees::new(374.99).floor_whole(), 374.0);
    /// assert_eq!(Rupees::new(-0.5).floor_whole(), -1.0);
    /// ```
    #[inline]
    pub fn floor_whole(&self) -> f64 {
        self.0.floor()
    }

    /// Calculates tax on this amount.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Rupees;
    /// use quote_core::types::TaxRate;
    ///
    /// let taxable = Rupees::new(317.25);
    /// let cgst = taxable.calculate_tax(TaxRate::from_bps(900));
    /// assert!((cgst.value() - 28.5525).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn calculate_tax(&self, rate: TaxRate) -> Rupees {
        Rupees(saturate(self.0 * rate.fraction()))
    }

    /// Returns `percent`% of this amount. Any sign, any magnitude.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Rupees;
    ///
    /// let subtotal = Rupees::new(200.0);
    /// assert_eq!(subtotal.percentage(10.0).value(), 20.0);
    /// assert_eq!(subtotal.percentage(-5.0).value(), -10.0);
    /// ```
    #[inline]
    pub fn percentage(&self, percent: f64) -> Rupees {
        Rupees(saturate(self.0 * (finite_or_zero(percent) / 100.0)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount the way the printable document does: `₹1234.50`.
///
/// Negative amounts carry the sign in front of the symbol (`-₹35.25`).
/// Values that round to zero never show a sign.
impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = format!("{:.2}", self.0.abs());
        let sign = if self.0 < 0.0 && digits != "0.00" {
            "-"
        } else {
            ""
        };
        write!(f, "{}{}{}", sign, CURRENCY_SYMBOL, digits)
    }
}

impl From<f64> for Rupees {
    fn from(value: f64) -> Self {
        Rupees::new(value)
    }
}

impl Add for Rupees {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rupees(saturate(self.0 + other.0))
    }
}

impl AddAssign for Rupees {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Rupees {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Rupees(saturate(self.0 - other.0))
    }
}

impl Neg for Rupees {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Rupees(-self.0)
    }
}

/// Multiplication by a quantity.
impl Mul<f64> for Rupees {
    type Output = Self;

    #[inline]
    fn mul(self, qty: f64) -> Self {
        Rupees(saturate(self.0 * finite_or_zero(qty)))
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Self {
        iter.fold(Rupees::zero(), |acc, amount| acc + amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("12"), 12.0);
        assert_eq!(coerce_number(" 2.5 "), 2.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("12abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("-3"), -3.0);
    }

    #[test]
    fn test_non_finite_becomes_zero() {
        assert_eq!(Rupees::new(f64::NAN).value(), 0.0);
        assert_eq!(Rupees::new(f64::INFINITY).value(), 0.0);
        assert_eq!(Rupees::new(f64::NEG_INFINITY).value(), 0.0);
        assert_eq!((Rupees::new(10.0) * f64::NAN).value(), 0.0);
    }

    #[test]
    fn test_overflow_saturates() {
        let big = Rupees::new(1e308);
        assert_eq!((big + big).value(), f64::MAX);
        assert_eq!((-big - big).value(), -f64::MAX);
        assert_eq!((big * 10.0).value(), f64::MAX);
        assert_eq!((big * -10.0).value(), -f64::MAX);
        assert_eq!(Rupees::new(f64::MAX).percentage(1000.0).value(), f64::MAX);
        assert_eq!((Rupees::new(0.0) * 1e308).value(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rupees::new(1099.0).to_string(), "₹1099.00");
        assert_eq!(Rupees::new(374.355).to_string(), "₹374.36");
        assert_eq!(Rupees::new(28.5525).to_string(), "₹28.55");
        assert_eq!(Rupees::new(-35.25).to_string(), "-₹35.25");
        assert_eq!(Rupees::zero().to_string(), "₹0.00");
        assert_eq!(Rupees::new(-0.001).to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupees::new(100.5);
        let b = Rupees::new(50.25);

        assert_eq!((a + b).value(), 150.75);
        assert_eq!((a - b).value(), 50.25);
        assert_eq!((a * 2.0).value(), 201.0);
        assert_eq!((-a).value(), -100.5);

        let mut total = Rupees::zero();
        total += a;
        total += b;
        assert_eq!(total.value(), 150.75);
    }

    #[test]
    fn test_sum() {
        let total: Rupees = [1.0, 2.5, 3.25].iter().copied().map(Rupees::new).sum();
        assert_eq!(total.value(), 6.75);

        let empty: Rupees = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_calculation() {
        let amount = Rupees::new(1000.0);
        let tax = amount.calculate_tax(TaxRate::from_bps(900));
        assert!((tax.value() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_any_sign() {
        let subtotal = Rupees::new(352.5);
        assert!((subtotal.percentage(10.0).value() - 35.25).abs() < 1e-9);
        assert!((subtotal.percentage(-10.0).value() + 35.25).abs() < 1e-9);
        assert!((subtotal.percentage(150.0).value() - 528.75).abs() < 1e-9);
    }

    #[test]
    fn test_floor_and_checks() {
        assert_eq!(Rupees::new(374.355).floor_whole(), 374.0);
        assert!(Rupees::new(-1.0).is_negative());
        assert!(!Rupees::zero().is_negative());
        assert_eq!(Rupees::new(-4.5).abs().value(), 4.5);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Rupees::new(374.355)).unwrap();
        assert_eq!(json, "374.355");
    }
}
