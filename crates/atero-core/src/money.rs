//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    R250.00 is 25000 cents, R50 off is exactly 5000 cents               │
//! │    Sums, discounts and totals are exact integer arithmetic             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atero_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(25_000); // R250.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // R500.00
//! let total = price + Money::from_cents(9_500);  // R345.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(250.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents of a
/// South African Rand).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediate values (discount math)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// EVERY monetary value in the system flows through this type: catalog
/// prices, cart line totals, the subtotal, the special discount, the final
/// total. Only the presentation layer converts to a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use atero_core::money::Money;
    ///
    /// let price = Money::from_cents(9_500); // Represents R95.00
    /// assert_eq!(price.cents(), 9_500);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Calculations and the API all use cents; only the UI formats rands.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (rands and cents).
    ///
    /// ## Example
    /// ```rust
    /// use atero_core::money::Money;
    ///
    /// let price = Money::from_major_minor(199, 50); // R199.50
    /// assert_eq!(price.cents(), 19_950);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -R5.50, not -R4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rands) portion.
    ///
    /// ## Example
    /// ```rust
    /// use atero_core::money::Money;
    ///
    /// let price = Money::from_cents(19_950);
    /// assert_eq!(price.rands(), 199);
    /// ```
    #[inline]
    pub const fn rands(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use atero_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4_500); // R45.00
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 13_500); // R135.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Subtracts, clamping the result at zero.
    ///
    /// ## Why Clamp?
    /// The cart total is `subtotal - discount`. The discount formula alone
    /// does not formally guarantee `discount <= subtotal`, so the total is
    /// clamped rather than allowed to go negative.
    ///
    /// ## Example
    /// ```rust
    /// use atero_core::money::Money;
    ///
    /// let small = Money::from_cents(1_000);
    /// let large = Money::from_cents(5_000);
    /// assert_eq!(small.saturating_sub(large), Money::zero());
    /// assert_eq!(large.saturating_sub(small).cents(), 4_000);
    /// ```
    #[inline]
    pub const fn saturating_sub(&self, other: Self) -> Self {
        let diff = self.0 - other.0;
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the fixed currency format the
/// ordering screens use: `R ` prefix, two decimal places.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R {}.{:02}", sign, self.rands().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
