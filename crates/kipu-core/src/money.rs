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
//! │  A register reconciled with floats drifts by céntimos over a shift     │
//! │  and reports phantom descuadres.                                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Céntimos                                         │
//! │    S/ 10.99 is stored as 1099. Sums are exact, always.                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kipu_core::money::Money;
//!
//! // Create from céntimos (preferred)
//! let precio = Money::from_centimos(1099); // S/ 10.99
//!
//! // Arithmetic operations
//! let doble = precio * 2;                        // S/ 21.98
//! let total = precio + Money::from_centimos(500); // S/ 15.99
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in céntimos (the smallest unit of the sol).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for egresos and descuadres
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from céntimos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use kipu_core::money::Money;
    ///
    /// let precio = Money::from_centimos(1099); // Represents S/ 10.99
    /// assert_eq!(precio.centimos(), 1099);
    /// ```
    ///
    /// ## Why Céntimos?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Storage, calculations, and the API all use céntimos.
    /// Only the UI converts to soles for display.
    #[inline]
    pub const fn from_centimos(centimos: i64) -> Self {
        Money(centimos)
    }

    /// Creates a Money value from soles and céntimos.
    ///
    /// ## Example
    /// ```rust
    /// use kipu_core::money::Money;
    ///
    /// let precio = Money::from_soles_centimos(10, 99); // S/ 10.99
    /// assert_eq!(precio.centimos(), 1099);
    ///
    /// let faltante = Money::from_soles_centimos(-5, 50); // -S/ 5.50 (shortage)
    /// assert_eq!(faltante.centimos(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the soles part should be negative.
    /// `from_soles_centimos(-5, 50)` = -S/ 5.50, not -S/ 4.50
    #[inline]
    pub const fn from_soles_centimos(soles: i64, centimos: i64) -> Self {
        if soles < 0 {
            Money(soles * 100 - centimos)
        } else {
            Money(soles * 100 + centimos)
        }
    }

    /// Returns the value in céntimos (smallest currency unit).
    #[inline]
    pub const fn centimos(&self) -> i64 {
        self.0
    }

    /// Returns the soles (major unit) portion.
    ///
    /// ## Example
    /// ```rust
    /// use kipu_core::money::Money;
    ///
    /// assert_eq!(Money::from_centimos(1099).soles(), 10);
    /// assert_eq!(Money::from_centimos(-550).soles(), -5);
    /// ```
    #[inline]
    pub const fn soles(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the céntimos portion (always 0-99).
    #[inline]
    pub const fn centimos_parte(&self) -> i64 {
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

    /// Returns the absolute value.
    ///
    /// Used by the discrepancy check: a descuadre of -S/ 0.50 (shortage)
    /// and +S/ 0.50 (surplus) are equally far from balance.
    ///
    /// ## Example
    /// ```rust
    /// use kipu_core::money::Money;
    ///
    /// let faltante = Money::from_centimos(-550);
    /// assert_eq!(faltante.abs().centimos(), 550);
    /// ```
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log output. Use frontend formatting for
/// actual UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}S/ {}.{:02}",
            sign,
            self.soles().abs(),
            self.centimos_parte()
        )
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_centimos() {
        let money = Money::from_centimos(1099);
        assert_eq!(money.centimos(), 1099);
        assert_eq!(money.soles(), 10);
        assert_eq!(money.centimos_parte(), 99);
    }

    #[test]
    fn test_from_soles_centimos() {
        let money = Money::from_soles_centimos(10, 99);
        assert_eq!(money.centimos(), 1099);

        let negative = Money::from_soles_centimos(-5, 50);
        assert_eq!(negative.centimos(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_centimos(1099)), "S/ 10.99");
        assert_eq!(format!("{}", Money::from_centimos(500)), "S/ 5.00");
        assert_eq!(format!("{}", Money::from_centimos(-550)), "-S/ 5.50");
        assert_eq!(format!("{}", Money::from_centimos(0)), "S/ 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_centimos(1000);
        let b = Money::from_centimos(500);

        assert_eq!((a + b).centimos(), 1500);
        assert_eq!((a - b).centimos(), 500);
        let result: Money = a * 3;
        assert_eq!(result.centimos(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc.centimos(), 500);
    }

    #[test]
    fn test_abs() {
        assert_eq!(Money::from_centimos(-550).abs().centimos(), 550);
        assert_eq!(Money::from_centimos(550).abs().centimos(), 550);
        assert_eq!(Money::zero().abs().centimos(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_centimos(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_centimos(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_ordering() {
        // abs(descuadre) <= margen relies on Ord
        assert!(Money::from_centimos(50) <= Money::from_centimos(100));
        assert!(Money::from_centimos(150) > Money::from_centimos(100));
    }

    #[test]
    fn test_serde_bare_integer() {
        let json = serde_json::to_string(&Money::from_centimos(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str("1099").unwrap();
        assert_eq!(back, Money::from_centimos(1099));
    }
}
