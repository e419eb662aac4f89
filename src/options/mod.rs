//! Functional options for server construction.
//!
//! A [`Server`] is created from its required fields plus any number of
//! [`ServerOption`] mutators. Mutators run in the order given; a field no
//! mutator touches keeps its zero value.
//!
//! # Example
//!
//! ```rust
//! use patterncraft::options::{with_label, with_limit, with_timeout, Server};
//! use std::time::Duration;
//!
//! let server = Server::new(
//!     "server",
//!     "",
//!     10000,
//!     [
//!         with_label("ooo"),
//!         with_limit(2),
//!         with_timeout(Duration::from_secs(1)),
//!     ],
//! );
//!
//! assert_eq!(server.options().label, "ooo");
//! assert_eq!(server.options().limit, 2);
//! ```

mod builder;
mod error;

pub use builder::ServerBuilder;
pub use error::BuildError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Optional server settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub label: String,
    pub limit: i64,
    pub timeout: Duration,
}

/// One-shot mutator applied to [`Options`] during construction.
pub struct ServerOption(Box<dyn FnOnce(&mut Options) + Send>);

impl ServerOption {
    /// Wrap an arbitrary mutator.
    pub fn new<F>(apply: F) -> Self
    where
        F: FnOnce(&mut Options) + Send + 'static,
    {
        Self(Box::new(apply))
    }

    fn apply(self, options: &mut Options) {
        (self.0)(options)
    }
}

impl fmt::Debug for ServerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServerOption")
    }
}

pub fn with_label(label: impl Into<String>) -> ServerOption {
    let label = label.into();
    ServerOption::new(move |options| options.label = label)
}

pub fn with_limit(limit: i64) -> ServerOption {
    ServerOption::new(move |options| options.limit = limit)
}

pub fn with_timeout(timeout: Duration) -> ServerOption {
    ServerOption::new(move |options| options.timeout = timeout)
}

/// Apply `ops` in order to zeroed options.
pub fn apply_options<I>(ops: I) -> Options
where
    I: IntoIterator<Item = ServerOption>,
{
    let mut options = Options::default();
    for op in ops {
        op.apply(&mut options);
    }
    options
}

/// A named server endpoint and its options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub name: String,
    pub host: String,
    pub port: u16,
    options: Options,
}

impl Server {
    pub fn new<I>(name: impl Into<String>, host: impl Into<String>, port: u16, ops: I) -> Self
    where
        I: IntoIterator<Item = ServerOption>,
    {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            options: apply_options(ops),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
