//! Entities Layer: Rational
//!
//! Provides exact rational arithmetic over arbitrary precision integers:
//! - `RationalValue` construction, canonicalization and arithmetic
//! - Comparison and equality independent of reduction state
//! - Mixed comparisons against integers through `RationalOperand`
//! - Operator and `num_traits` implementations
//!
//! Failures are reported as `RationalError`; diagnostic records go through
//! the `log` facade.

pub mod error;
pub mod operand;
pub mod ops;
pub mod rational;

pub use entities_utilities::BigNumber;
pub use error::RationalError;
pub use operand::RationalOperand;
pub use rational::RationalValue;
