//! Named strategies picked from a registry at runtime.
//!
//! Strategies register under a fixed name. An [`Adder`] is bound to one
//! strategy by name and checks its operands through that strategy.
//!
//! # Example
//!
//! ```rust
//! use patterncraft::strategy::{Adder, Operand, StrategyRegistry};
//!
//! let registry = StrategyRegistry::with_defaults();
//! let adder = Adder::new(&registry, "StringStrategy")?;
//!
//! let joined = adder.add(&Operand::from("one"), &Operand::from("two"))?;
//! assert_eq!(joined, Operand::from("one, two"));
//! # Ok::<(), patterncraft::strategy::StrategyError>(())
//! ```

mod error;

pub use error::StrategyError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Value an add strategy operates on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Text(String),
    Integer(i64),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{:?}", text),
            Self::Integer(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Combines two operands of the kind the strategy accepts.
pub trait AddStrategy: Send + Sync {
    /// Registry key.
    fn name(&self) -> &'static str;

    fn add(&self, a: &Operand, b: &Operand) -> Result<Operand, StrategyError>;
}

fn expect_text<'a>(value: &'a Operand) -> Result<&'a str, StrategyError> {
    match value {
        Operand::Text(text) => Ok(text),
        other => Err(StrategyError::TypeMismatch {
            expected: "text",
            value: other.to_string(),
        }),
    }
}

fn expect_integer(value: &Operand) -> Result<i64, StrategyError> {
    match value {
        Operand::Integer(n) => Ok(*n),
        other => Err(StrategyError::TypeMismatch {
            expected: "integer",
            value: other.to_string(),
        }),
    }
}

/// Joins two texts with `", "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringAddStrategy;

impl AddStrategy for StringAddStrategy {
    fn name(&self) -> &'static str {
        "StringStrategy"
    }

    fn add(&self, a: &Operand, b: &Operand) -> Result<Operand, StrategyError> {
        let a = expect_text(a)?;
        let b = expect_text(b)?;
        Ok(Operand::Text(format!("{}, {}", a, b)))
    }
}

/// Sums two integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerAddStrategy;

impl AddStrategy for IntegerAddStrategy {
    fn name(&self) -> &'static str {
        "IntegerStrategy"
    }

    fn add(&self, a: &Operand, b: &Operand) -> Result<Operand, StrategyError> {
        let left = expect_integer(a)?;
        let right = expect_integer(b)?;
        left.checked_add(right)
            .map(Operand::Integer)
            .ok_or(StrategyError::Overflow { left, right })
    }
}

/// Strategies keyed by name.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: BTreeMap<&'static str, Arc<dyn AddStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the string and integer strategies.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(StringAddStrategy);
        registry.register(IntegerAddStrategy);
        registry
    }

    /// Register `strategy` under its name, replacing any previous entry.
    pub fn register<S>(&mut self, strategy: S) -> &mut Self
    where
        S: AddStrategy + 'static,
    {
        let name = strategy.name();
        if self.strategies.insert(name, Arc::new(strategy)).is_some() {
            debug!(strategy = name, "replaced registered strategy");
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AddStrategy>> {
        self.strategies.get(name).cloned()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.keys().copied().collect()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}

/// Adds operands with a strategy chosen by name.
#[derive(Clone)]
pub struct Adder {
    strategy: Arc<dyn AddStrategy>,
}

impl Adder {
    pub fn new(registry: &StrategyRegistry, name: &str) -> Result<Self, StrategyError> {
        let strategy = registry
            .get(name)
            .ok_or_else(|| StrategyError::UnknownStrategy {
                name: name.to_string(),
            })?;
        Ok(Self { strategy })
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn add(&self, a: &Operand, b: &Operand) -> Result<Operand, StrategyError> {
        let result = self.strategy.add(a, b)?;
        info!(strategy = self.strategy.name(), result = %result, "adder finished");
        Ok(result)
    }
}

impl fmt::Debug for Adder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adder")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
