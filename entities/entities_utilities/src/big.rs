//! Big Number Operations
//!
//! Provides the arbitrary precision integer primitive used by the rational
//! layer.
//!
//! This module uses the `malachite` crate for high-performance
//! arbitrary-precision arithmetic. Everything the rational core needs from an
//! integer lives here: arithmetic, GCD, sign and ordering, and decimal
//! formatting.

use malachite::base::num::arithmetic::traits::{Abs, Gcd, UnsignedAbs};
use malachite::base::num::basic::traits::{NegativeOne, One, Zero};
use malachite::Integer;

/// Big number representation using malachite's Integer
///
/// All operations are pure and return new values.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// The value 0
    pub const ZERO: BigNumber = BigNumber { value: Integer::ZERO };

    /// The value 1
    pub const ONE: BigNumber = BigNumber { value: Integer::ONE };

    /// The value -1
    pub const NEGATIVE_ONE: BigNumber = BigNumber {
        value: Integer::NEGATIVE_ONE,
    };

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i32
    pub fn from_i32(value: i32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Sign of the number: -1, 0 or 1
    pub fn signum(&self) -> i32 {
        if self.value > 0 {
            1
        } else if self.value < 0 {
            -1
        } else {
            0
        }
    }

    /// Check if the number is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.value > 0
    }

    /// Check if the number is strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is one
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Divide two big numbers: x / y
    ///
    /// The quotient is truncated toward zero, so it is exact whenever `other`
    /// divides `self`. Returns None if dividing by zero.
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Negate: -x
    pub fn neg(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Absolute value: |x|
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.clone().abs(),
        }
    }

    /// Greatest common divisor of |x| and |y|
    ///
    /// The result is never negative. `gcd(0, y)` is `|y|`, so only
    /// `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &Self) -> Self {
        let gcd = (&self.value).unsigned_abs().gcd((&other.value).unsigned_abs());
        Self {
            value: Integer::from(gcd),
        }
    }

    /// Compare two big numbers (signed comparison)
    ///
    /// Returns:
    /// - -1 if self < other
    /// - 0 if self == other
    /// - 1 if self > other
    pub fn comp(&self, other: &Self) -> i32 {
        match self.value.cmp(&other.value) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Unwrap into the internal Integer value
    pub fn into_integer(self) -> Integer {
        self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<&Integer> for BigNumber {
    fn from(value: &Integer) -> Self {
        Self::from_integer(value.clone())
    }
}

impl From<BigNumber> for Integer {
    fn from(value: BigNumber) -> Self {
        value.value
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigNumber {
                fn from(value: $t) -> Self {
                    Self {
                        value: Integer::from(value),
                    }
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_number_creation() {
        let big = BigNumber::from_i64(12345);
        assert!(big.is_positive());
        assert!(!big.is_zero());

        let big_neg = BigNumber::from_i64(-12345);
        assert!(!big_neg.is_positive());
        assert!(big_neg.is_negative());
    }

    #[test]
    fn test_constants() {
        assert!(BigNumber::ZERO.is_zero());
        assert!(BigNumber::ONE.is_one());
        assert_eq!(BigNumber::NEGATIVE_ONE.to_i64(), Some(-1));
        assert_eq!(BigNumber::default(), BigNumber::ZERO);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = BigNumber::from_i64(100);
        let b = BigNumber::from_i64(50);

        assert_eq!(a.plus(&b).to_i64(), Some(150));
        assert_eq!(a.minus(&b).to_i64(), Some(50));
        assert_eq!(a.times(&b).to_i64(), Some(5000));
        assert_eq!(a.div(&b).unwrap().to_i64(), Some(2));
        assert!(a.div(&BigNumber::ZERO).is_none());
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        let a = BigNumber::from_i64(-7);
        let b = BigNumber::from_i64(2);
        assert_eq!(a.div(&b).unwrap().to_i64(), Some(-3));
    }

    #[test]
    fn test_gcd() {
        let a = BigNumber::from_i64(-12);
        let b = BigNumber::from_i64(18);
        assert_eq!(a.gcd(&b).to_i64(), Some(6));
        assert_eq!(b.gcd(&a).to_i64(), Some(6));

        assert_eq!(BigNumber::ZERO.gcd(&b).to_i64(), Some(18));
        assert_eq!(BigNumber::ZERO.gcd(&a).to_i64(), Some(12));
        assert!(BigNumber::ZERO.gcd(&BigNumber::ZERO).is_zero());
    }

    #[test]
    fn test_sign_helpers() {
        assert_eq!(BigNumber::from_i64(-5).signum(), -1);
        assert_eq!(BigNumber::ZERO.signum(), 0);
        assert_eq!(BigNumber::from_i64(9).signum(), 1);

        assert_eq!(BigNumber::from_i64(-5).abs().to_i64(), Some(5));
        assert_eq!(BigNumber::from_i64(5).neg().to_i64(), Some(-5));
        assert_eq!(BigNumber::ZERO.neg(), BigNumber::ZERO);
    }

    #[test]
    fn test_comparison() {
        let a = BigNumber::from_i64(100);
        let b = BigNumber::from_i64(50);
        let c = BigNumber::from_i64(100);

        assert_eq!(a.comp(&b), 1);
        assert_eq!(b.comp(&a), -1);
        assert_eq!(a.comp(&c), 0);
        assert!(b < a);
    }

    #[test]
    fn test_conversion() {
        let big = BigNumber::from_i64(12345);
        assert_eq!(big.to_u64(), Some(12345));
        assert_eq!(big.to_i64(), Some(12345));

        let big_neg = BigNumber::from_i64(-12345);
        assert_eq!(big_neg.to_u64(), None);
        assert_eq!(big_neg.to_i64(), Some(-12345));

        assert_eq!(BigNumber::from(7u8).to_i64(), Some(7));
        assert_eq!(BigNumber::from(-7i16).to_i64(), Some(-7));
        assert_eq!(BigNumber::from(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_display() {
        assert_eq!(BigNumber::from_i64(-255).to_string(), "-255");
        assert_eq!(BigNumber::ZERO.to_string(), "0");
    }

    #[test]
    fn test_large_numbers() {
        let a = BigNumber::from_u64(u64::MAX);
        let b = BigNumber::from_u64(1);
        let sum = a.plus(&b);

        assert!(sum.to_i64().is_none());
        assert!(sum.to_u64().is_none());
        assert_eq!(sum.to_string(), "18446744073709551616");
    }
}
