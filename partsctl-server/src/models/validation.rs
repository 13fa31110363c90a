//! Validation error types

use std::fmt;

/// Validation error for query-string input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Every supplied value was outside the accepted set
    NoAcceptedValue {
        field: &'static str,
        accepted: &'static [&'static str],
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAcceptedValue { field, accepted } => {
                write!(f, "no valid {} specified; use: {}", field, accepted.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}
