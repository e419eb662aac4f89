//! Field violations reported by validators.

use thiserror::Error;

/// A single failed field check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("{field}: expected {value:?} to be no smaller than {min}")]
    TooShort {
        field: &'static str,
        value: String,
        min: usize,
    },

    #[error("{field}: expected {value:?} to be no bigger than {max}")]
    TooLong {
        field: &'static str,
        value: String,
        max: usize,
    },

    #[error("{field}: expected {predicate} to be true for {value:?}")]
    PredicateFailed {
        field: &'static str,
        value: String,
        predicate: &'static str,
    },

    #[error("{field}: expected {value:?} to be one of {}", .options.join(", "))]
    NotOneOf {
        field: &'static str,
        value: String,
        options: Vec<String>,
    },

    #[error("{field}: expected {value} to be at least {min}")]
    BelowMinimum {
        field: &'static str,
        value: String,
        min: String,
    },

    #[error("{field}: expected {value} to be no more than {max}")]
    AboveMaximum {
        field: &'static str,
        value: String,
        max: String,
    },
}

impl Violation {
    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::PredicateFailed { field, .. }
            | Self::NotOneOf { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. } => field,
        }
    }
}
