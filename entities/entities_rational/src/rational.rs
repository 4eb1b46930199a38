//! Rational Number Operations Module
//!
//! This module provides `RationalValue`, an exact rational number built from an
//! arbitrary precision numerator and denominator.
//!
//! # Canonical Form
//!
//! Every value keeps its denominator strictly positive: a negative denominator
//! supplied at construction moves its sign onto the numerator, and a zero
//! denominator is rejected. Each value also carries an `auto_reduce` flag.
//! When the flag is set, construction divides numerator and denominator by
//! their greatest common divisor; when it is clear, the pair is kept exactly
//! as given until [`RationalValue::reduce`] is called.
//!
//! The flag never changes the value a rational denotes. Equality, ordering
//! and hashing all work on the mathematical value, so `2/4` (unreduced) and
//! `1/2` compare equal and hash identically.
//!
//! # Flag Propagation
//!
//! Binary operations build their result with the flag of the left operand.
//!
//! # Examples
//!
//! ```rust
//! use entities_rational::RationalValue;
//!
//! let half = RationalValue::from_fraction(1, 2).unwrap();
//! let third = RationalValue::from_fraction(1, 3).unwrap();
//!
//! assert_eq!(half.plus(&third).to_string(), "5/6");
//! assert_eq!(half.div(&third).unwrap().to_string(), "3/2");
//! ```
//!
//! ```rust
//! use entities_rational::RationalValue;
//!
//! let unreduced = RationalValue::from_fraction_with(2, 4, false).unwrap();
//! assert_eq!(unreduced.to_string(), "2/4");
//! assert_eq!(unreduced, RationalValue::from_fraction(1, 2).unwrap());
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use entities_utilities::BigNumber;
use malachite::Integer;

use crate::error::RationalError;

/// Exact rational number over arbitrary precision integers.
///
/// # Invariants
///
/// - the denominator is never zero
/// - the denominator is always positive
/// - when `auto_reduce` is set, numerator and denominator are coprime
///
/// # Examples
///
/// ```rust
/// use entities_rational::RationalValue;
///
/// let r = RationalValue::from_fraction(6, -8).unwrap();
/// assert_eq!(r.to_string(), "-3/4");
/// assert!(r.denominator().is_positive());
/// ```
#[derive(Clone, Debug)]
pub struct RationalValue {
    numerator: BigNumber,
    denominator: BigNumber,
    auto_reduce: bool,
}

impl RationalValue {
    /// The value 0/1
    pub const ZERO: RationalValue = RationalValue {
        numerator: BigNumber::ZERO,
        denominator: BigNumber::ONE,
        auto_reduce: true,
    };

    /// The value 1/1
    pub const ONE: RationalValue = RationalValue {
        numerator: BigNumber::ONE,
        denominator: BigNumber::ONE,
        auto_reduce: true,
    };

    /// The value -1/1
    pub const MINUS_ONE: RationalValue = RationalValue {
        numerator: BigNumber::NEGATIVE_ONE,
        denominator: BigNumber::ONE,
        auto_reduce: true,
    };

    /// Create the value 0/1 with the given reduction flag.
    pub fn new(auto_reduce: bool) -> Self {
        Self {
            auto_reduce,
            ..Self::ZERO
        }
    }

    /// Create the whole number `value/1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_rational::RationalValue;
    ///
    /// let r = RationalValue::from_integer(-42, false);
    /// assert_eq!(r.to_string(), "-42");
    /// assert!(r.is_integer());
    /// ```
    pub fn from_integer<T: Into<BigNumber>>(value: T, auto_reduce: bool) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigNumber::ONE,
            auto_reduce,
        }
    }

    /// Create `numerator/denominator`, reduced to lowest terms.
    ///
    /// # Returns
    ///
    /// * `Ok(RationalValue)` with a positive denominator
    /// * `Err(RationalError::InvalidDenominator)` if `denominator` is zero
    pub fn from_fraction<N, D>(numerator: N, denominator: D) -> Result<Self, RationalError>
    where
        N: Into<BigNumber>,
        D: Into<BigNumber>,
    {
        Self::from_fraction_with(numerator, denominator, true)
    }

    /// Create `numerator/denominator` with an explicit reduction flag.
    ///
    /// A negative denominator moves its sign onto the numerator. With
    /// `auto_reduce` set the pair is divided by its GCD, otherwise it is kept
    /// as given.
    ///
    /// # Returns
    ///
    /// * `Ok(RationalValue)` with a positive denominator
    /// * `Err(RationalError::InvalidDenominator)` if `denominator` is zero
    pub fn from_fraction_with<N, D>(
        numerator: N,
        denominator: D,
        auto_reduce: bool,
    ) -> Result<Self, RationalError>
    where
        N: Into<BigNumber>,
        D: Into<BigNumber>,
    {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            log::debug!("rejected rational {}/0: zero denominator", numerator);
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::canonical(numerator, denominator, auto_reduce))
    }

    /// Build a value from a pair whose denominator is known to be nonzero,
    /// restoring the positive-denominator and reduction invariants.
    fn canonical(numerator: BigNumber, denominator: BigNumber, auto_reduce: bool) -> Self {
        let (numerator, denominator) = if denominator.is_negative() {
            (numerator.neg(), denominator.neg())
        } else {
            (numerator, denominator)
        };
        let mut value = Self {
            numerator,
            denominator,
            auto_reduce,
        };
        if auto_reduce {
            value.reduce();
        }
        value
    }

    /// Reduce this value to lowest terms in place.
    ///
    /// This is the only operation that mutates a value; it requires exclusive
    /// access to the receiver. The reduction flag is left unchanged.
    pub fn reduce(&mut self) {
        let gcd = self.numerator.gcd(&self.denominator);
        if gcd.is_zero() || gcd.is_one() {
            return;
        }
        log::trace!(
            "reducing {}/{} by common factor {}",
            self.numerator,
            self.denominator,
            gcd
        );
        // gcd divides both parts and is nonzero, so the divisions are exact
        if let (Some(numerator), Some(denominator)) =
            (self.numerator.div(&gcd), self.denominator.div(&gcd))
        {
            self.numerator = numerator;
            self.denominator = denominator;
        }
    }

    /// Return the canonical form of this value, keeping its reduction flag.
    pub fn reduced(&self) -> Self {
        let mut value = self.clone();
        value.reduce();
        value
    }

    /// Rebuild this value under a different reduction flag.
    ///
    /// Setting the flag reduces the result; clearing it keeps the current
    /// numerator and denominator.
    pub fn with_auto_reduce(&self, auto_reduce: bool) -> Self {
        Self::canonical(
            self.numerator.clone(),
            self.denominator.clone(),
            auto_reduce,
        )
    }

    /// The numerator, carrying the sign of the value.
    pub fn numerator(&self) -> &BigNumber {
        &self.numerator
    }

    /// The denominator, always positive.
    pub fn denominator(&self) -> &BigNumber {
        &self.denominator
    }

    /// Whether results built from this value are reduced eagerly.
    pub fn auto_reduce(&self) -> bool {
        self.auto_reduce
    }

    /// Split into `(numerator, denominator)`.
    pub fn into_parts(self) -> (BigNumber, BigNumber) {
        (self.numerator, self.denominator)
    }

    /// Add two rational numbers.
    ///
    /// Computes `(a.n * b.d + b.n * a.d) / (a.d * b.d)`.
    pub fn plus(&self, other: &Self) -> Self {
        let numerator = self
            .numerator
            .times(&other.denominator)
            .plus(&other.numerator.times(&self.denominator));
        let denominator = self.denominator.times(&other.denominator);
        Self::canonical(numerator, denominator, self.auto_reduce)
    }

    /// Subtract two rational numbers.
    ///
    /// Computes `(a.n * b.d - b.n * a.d) / (a.d * b.d)`.
    pub fn minus(&self, other: &Self) -> Self {
        let numerator = self
            .numerator
            .times(&other.denominator)
            .minus(&other.numerator.times(&self.denominator));
        let denominator = self.denominator.times(&other.denominator);
        Self::canonical(numerator, denominator, self.auto_reduce)
    }

    /// Multiply two rational numbers.
    ///
    /// Computes `(a.n * b.n) / (a.d * b.d)`.
    pub fn times(&self, other: &Self) -> Self {
        let numerator = self.numerator.times(&other.numerator);
        let denominator = self.denominator.times(&other.denominator);
        Self::canonical(numerator, denominator, self.auto_reduce)
    }

    /// Divide two rational numbers.
    ///
    /// # Returns
    ///
    /// * `Ok(RationalValue)` equal to `self.times(&other.inverse()?)`
    /// * `Err(RationalError::DivisionByZero)` if `other` is zero
    pub fn div(&self, other: &Self) -> Result<Self, RationalError> {
        let inverse = other.inverse().map_err(|err| {
            log::debug!("cannot divide {} by zero", self);
            err
        })?;
        Ok(self.times(&inverse))
    }

    /// Multiplicative inverse `denominator/numerator`.
    ///
    /// # Returns
    ///
    /// * `Ok(RationalValue)` with the same reduction flag
    /// * `Err(RationalError::DivisionByZero)` if the numerator is zero
    pub fn inverse(&self) -> Result<Self, RationalError> {
        if self.numerator.is_zero() {
            log::debug!("cannot invert zero value {}", self);
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::canonical(
            self.denominator.clone(),
            self.numerator.clone(),
            self.auto_reduce,
        ))
    }

    /// Absolute value `|n|/d`.
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
            auto_reduce: self.auto_reduce,
        }
    }

    /// Negative absolute value `-|n|/d`.
    ///
    /// This is not a sign flip: the result is never positive, so
    /// `neg(3/4)` and `neg(-3/4)` both give `-3/4`.
    pub fn neg(&self) -> Self {
        Self {
            numerator: self.numerator.abs().neg(),
            denominator: self.denominator.clone(),
            auto_reduce: self.auto_reduce,
        }
    }

    /// Unary plus, defined as the absolute value.
    pub fn positive(&self) -> Self {
        self.abs()
    }

    /// Sign of the value: -1, 0 or 1.
    pub fn sign(&self) -> i32 {
        self.numerator.signum()
    }

    /// Compare two rational numbers by the sign of their difference.
    ///
    /// The difference cross-multiplies denominators, so the result does not
    /// depend on whether either operand is reduced.
    pub fn comp(&self, other: &Self) -> Ordering {
        self.minus(other).sign().cmp(&0)
    }

    /// Value equality, independent of reduction state.
    ///
    /// All representations of zero are equal. Otherwise both operands are
    /// reduced and their numerator/denominator pairs compared.
    pub fn equals(&self, other: &Self) -> bool {
        if self.numerator.is_zero() && other.numerator.is_zero() {
            return true;
        }
        let lhs = self.reduced();
        let rhs = other.reduced();
        lhs.numerator == rhs.numerator && lhs.denominator == rhs.denominator
    }

    /// Check if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Check if the value is exactly one, whatever its representation.
    pub fn is_one(&self) -> bool {
        let reduced = self.reduced();
        reduced.numerator.is_one() && reduced.denominator.is_one()
    }

    /// Check if the value is a whole number (reduced denominator is 1).
    pub fn is_integer(&self) -> bool {
        self.reduced().denominator.is_one()
    }

    /// Check if the value is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Check if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// The value as a whole number, if it is one.
    pub fn to_integer(&self) -> Option<BigNumber> {
        let reduced = self.reduced();
        if reduced.denominator.is_one() {
            Some(reduced.numerator)
        } else {
            None
        }
    }

    /// The value as an `i64`, if it is a whole number within range.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_integer()?.to_i64()
    }
}

impl Default for RationalValue {
    fn default() -> Self {
        Self::ZERO
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RationalValue {
                fn from(value: $t) -> Self {
                    RationalValue::from_integer(value, true)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_integer!(BigNumber, Integer);

impl PartialEq for RationalValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for RationalValue {}

impl PartialOrd for RationalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RationalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comp(other)
    }
}

impl Hash for RationalValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Every zero reduces to 0/1, so equal values share a reduced pair
        let reduced = self.reduced();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}

impl std::fmt::Display for RationalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.numerator.is_zero() {
            write!(f, "0")
        } else if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
