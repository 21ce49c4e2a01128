//! Error types for the pricing boundary.
//!
//! The formulas themselves never fail; these errors come from the optional
//! validation layer and from snapshot (de)serialization.

use std::fmt;

/// Errors raised when building or serializing pricing inputs and outputs.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input is non-finite or outside its domain.
    InvalidParameter {
        /// Name of the offending field.
        name: &'static str,
        /// Value supplied.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Serialization to JSON failed.
    SerializationError {
        /// Underlying error message.
        message: String,
    },

    /// Deserialization from JSON failed.
    DeserializationError {
        /// Underlying error message.
        message: String,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "invalid {name}: {value} ({reason})")
            }
            PricingError::SerializationError { message } => {
                write!(f, "serialization error: {message}")
            }
            PricingError::DeserializationError { message } => {
                write!(f, "deserialization error: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}
