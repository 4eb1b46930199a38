//! Mixed-Operand Comparison
//!
//! A rational value can be compared against any member of a closed set of
//! operand types: another `RationalValue`, a `BigNumber`, a raw
//! `malachite::Integer`, or any primitive integer. Integers take part as
//! `k/1`, so the same equality and ordering rules apply to all of them.
//!
//! The static path is the [`RationalOperand`] trait, which backs
//! [`RationalValue::compare_to`], [`RationalValue::equals_to`] and the
//! `PartialEq`/`PartialOrd` implementations in both directions. The dynamic
//! path, [`RationalValue::try_compare`] and [`RationalValue::try_equals`],
//! takes `&dyn Any` and rejects anything outside the set with
//! `RationalError::InvalidArgument`.

use std::any::Any;
use std::borrow::Cow;
use std::cmp::Ordering;

use entities_utilities::BigNumber;
use malachite::Integer;

use crate::error::RationalError;
use crate::rational::RationalValue;

/// A value that can stand on the right-hand side of a rational comparison.
pub trait RationalOperand {
    /// View this operand as a rational value.
    fn as_rational(&self) -> Cow<'_, RationalValue>;
}

impl RationalOperand for RationalValue {
    fn as_rational(&self) -> Cow<'_, RationalValue> {
        Cow::Borrowed(self)
    }
}

impl RationalOperand for BigNumber {
    fn as_rational(&self) -> Cow<'_, RationalValue> {
        Cow::Owned(RationalValue::from_integer(self.clone(), true))
    }
}

impl RationalOperand for Integer {
    fn as_rational(&self) -> Cow<'_, RationalValue> {
        Cow::Owned(RationalValue::from_integer(self, true))
    }
}

impl RationalValue {
    /// Compare against any accepted operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_rational::RationalValue;
    /// use std::cmp::Ordering;
    ///
    /// let r = RationalValue::from_fraction(7, 2).unwrap();
    /// assert_eq!(r.compare_to(&3u8), Ordering::Greater);
    /// assert_eq!(r.compare_to(&4i64), Ordering::Less);
    /// ```
    pub fn compare_to<T: RationalOperand + ?Sized>(&self, other: &T) -> Ordering {
        self.comp(&other.as_rational())
    }

    /// Value equality against any accepted operand.
    pub fn equals_to<T: RationalOperand + ?Sized>(&self, other: &T) -> bool {
        self.equals(&other.as_rational())
    }

    /// Compare against a value whose type is only known at runtime.
    ///
    /// # Returns
    ///
    /// * `Ok(Ordering)` if `other` is an accepted operand type
    /// * `Err(RationalError::InvalidArgument)` otherwise
    pub fn try_compare(&self, other: &dyn Any) -> Result<Ordering, RationalError> {
        let operand = downcast_operand(other)?;
        Ok(self.comp(&operand))
    }

    /// Value equality against a value whose type is only known at runtime.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` if `other` is an accepted operand type
    /// * `Err(RationalError::InvalidArgument)` otherwise
    pub fn try_equals(&self, other: &dyn Any) -> Result<bool, RationalError> {
        let operand = downcast_operand(other)?;
        Ok(self.equals(&operand))
    }
}

macro_rules! downcast_chain {
    ($value:expr; $($t:ty),*) => {
        $(
            if let Some(operand) = $value.downcast_ref::<$t>() {
                return Ok(operand.as_rational());
            }
        )*
    };
}

fn downcast_operand(other: &dyn Any) -> Result<Cow<'_, RationalValue>, RationalError> {
    downcast_chain!(other; RationalValue, BigNumber, Integer);
    downcast_chain!(other; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    log::debug!("rejected comparison operand {:?}", (*other).type_id());
    Err(RationalError::InvalidArgument(
        "expected a rational value or an integer".to_string(),
    ))
}

impl PartialEq<BigNumber> for RationalValue {
    fn eq(&self, other: &BigNumber) -> bool {
        self.equals_to(other)
    }
}

impl PartialEq<RationalValue> for BigNumber {
    fn eq(&self, other: &RationalValue) -> bool {
        other.equals_to(self)
    }
}

impl PartialOrd<BigNumber> for RationalValue {
    fn partial_cmp(&self, other: &BigNumber) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl PartialOrd<RationalValue> for BigNumber {
    fn partial_cmp(&self, other: &RationalValue) -> Option<Ordering> {
        Some(other.compare_to(self).reverse())
    }
}

impl PartialEq<Integer> for RationalValue {
    fn eq(&self, other: &Integer) -> bool {
        self.equals_to(other)
    }
}

impl PartialEq<RationalValue> for Integer {
    fn eq(&self, other: &RationalValue) -> bool {
        other.equals_to(self)
    }
}

impl PartialOrd<Integer> for RationalValue {
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl PartialOrd<RationalValue> for Integer {
    fn partial_cmp(&self, other: &RationalValue) -> Option<Ordering> {
        Some(other.compare_to(self).reverse())
    }
}

macro_rules! impl_primitive_operand {
    ($($t:ty),*) => {
        $(
            impl RationalOperand for $t {
                fn as_rational(&self) -> Cow<'_, RationalValue> {
                    Cow::Owned(RationalValue::from_integer(*self, true))
                }
            }

            impl PartialEq<$t> for RationalValue {
                fn eq(&self, other: &$t) -> bool {
                    self.equals_to(other)
                }
            }

            impl PartialEq<RationalValue> for $t {
                fn eq(&self, other: &RationalValue) -> bool {
                    other.equals_to(self)
                }
            }

            impl PartialOrd<$t> for RationalValue {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.compare_to(other))
                }
            }

            impl PartialOrd<RationalValue> for $t {
                fn partial_cmp(&self, other: &RationalValue) -> Option<Ordering> {
                    Some(other.compare_to(self).reverse())
                }
            }
        )*
    };
}

impl_primitive_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
