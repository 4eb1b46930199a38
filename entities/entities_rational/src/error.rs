//! Rational error types

/// Errors produced by rational construction, division and dynamic comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// A zero denominator was supplied to construction
    InvalidDenominator,
    /// Inversion or division by a zero value
    DivisionByZero,
    /// Comparison against a value that is not an accepted operand
    InvalidArgument(String),
}

impl std::fmt::Display for RationalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RationalError::InvalidDenominator => write!(f, "Denominator cannot be zero"),
            RationalError::DivisionByZero => write!(f, "Division by zero"),
            RationalError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for RationalError {}
