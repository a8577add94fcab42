//! Error handling for binary field arithmetic

use core::fmt;

/// The error type for binary field operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reduction polynomial rejected at field construction
    InvalidPolynomial {
        /// Reason why the polynomial is malformed
        reason: &'static str,
    },

    /// Multiplicative inverse of the zero element requested
    DivisionByZero,

    /// Bit-string encoding rejected during parsing
    InvalidEncoding {
        /// Context where the encoding error occurred
        context: &'static str,
        /// Reason why the encoding is invalid
        reason: &'static str,
    },

    /// Value has coefficient bits at or above the field degree
    OutOfRange {
        /// Context where the out-of-range value was rejected
        context: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

/// Result type for binary field operations
pub type Result<T> = core::result::Result<T, Error>;

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPolynomial { reason } => {
                write!(f, "Invalid reduction polynomial: {}", reason)
            }
            Error::DivisionByZero => {
                write!(f, "Division by zero: the zero element has no inverse")
            }
            Error::InvalidEncoding { context, reason } => {
                write!(f, "Invalid encoding for {}: {}", context, reason)
            }
            Error::OutOfRange { context } => {
                write!(
                    f,
                    "Out-of-range value for {}: coefficient bits at or above the field degree",
                    context
                )
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
