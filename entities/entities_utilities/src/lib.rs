//! Entities Layer: Utilities
//!
//! Provides the arbitrary precision integer primitive:
//! - Big number arithmetic, GCD, sign and ordering
//! - Conversions from every primitive integer type

pub mod big;

pub use big::BigNumber;
