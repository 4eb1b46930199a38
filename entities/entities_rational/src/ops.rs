//! Operator traits for `RationalValue`
//!
//! `+`, `-` and `*` delegate to `plus`, `minus` and `times` for every
//! owned/borrowed pairing, and unary `-` delegates to `neg`. Division is
//! fallible and only available through `RationalValue::div`.

use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

use crate::rational::RationalValue;

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $inner:ident) => {
        impl $imp<RationalValue> for RationalValue {
            type Output = RationalValue;

            fn $method(self, rhs: RationalValue) -> RationalValue {
                self.$inner(&rhs)
            }
        }

        impl<'a> $imp<&'a RationalValue> for RationalValue {
            type Output = RationalValue;

            fn $method(self, rhs: &'a RationalValue) -> RationalValue {
                self.$inner(rhs)
            }
        }

        impl<'a> $imp<RationalValue> for &'a RationalValue {
            type Output = RationalValue;

            fn $method(self, rhs: RationalValue) -> RationalValue {
                self.$inner(&rhs)
            }
        }

        impl<'a, 'b> $imp<&'b RationalValue> for &'a RationalValue {
            type Output = RationalValue;

            fn $method(self, rhs: &'b RationalValue) -> RationalValue {
                self.$inner(rhs)
            }
        }
    };
}

forward_binop!(Add, add, plus);
forward_binop!(Sub, sub, minus);
forward_binop!(Mul, mul, times);

/// Unary minus shares the `-|n|/d` semantics of `RationalValue::neg`.
impl Neg for RationalValue {
    type Output = RationalValue;

    fn neg(self) -> RationalValue {
        RationalValue::neg(&self)
    }
}

impl<'a> Neg for &'a RationalValue {
    type Output = RationalValue;

    fn neg(self) -> RationalValue {
        RationalValue::neg(self)
    }
}

impl Sum for RationalValue {
    fn sum<I: Iterator<Item = RationalValue>>(iter: I) -> RationalValue {
        iter.fold(RationalValue::ZERO, |acc, x| acc.plus(&x))
    }
}

impl<'a> Sum<&'a RationalValue> for RationalValue {
    fn sum<I: Iterator<Item = &'a RationalValue>>(iter: I) -> RationalValue {
        iter.fold(RationalValue::ZERO, |acc, x| acc.plus(x))
    }
}

impl Product for RationalValue {
    fn product<I: Iterator<Item = RationalValue>>(iter: I) -> RationalValue {
        iter.fold(RationalValue::ONE, |acc, x| acc.times(&x))
    }
}

impl<'a> Product<&'a RationalValue> for RationalValue {
    fn product<I: Iterator<Item = &'a RationalValue>>(iter: I) -> RationalValue {
        iter.fold(RationalValue::ONE, |acc, x| acc.times(x))
    }
}

impl num_traits::Zero for RationalValue {
    fn zero() -> Self {
        RationalValue::ZERO
    }

    fn is_zero(&self) -> bool {
        RationalValue::is_zero(self)
    }
}

impl num_traits::One for RationalValue {
    fn one() -> Self {
        RationalValue::ONE
    }

    fn is_one(&self) -> bool {
        RationalValue::is_one(self)
    }
}
