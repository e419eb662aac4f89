//! Strategy lookup and evaluation errors.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("No strategy registered under '{name}'")]
    UnknownStrategy { name: String },

    #[error("Expected {value} as {expected}")]
    TypeMismatch {
        expected: &'static str,
        value: String,
    },

    #[error("Integer overflow adding {left} and {right}")]
    Overflow { left: i64, right: i64 },
}
