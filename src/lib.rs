//! Patterncraft: classic object-oriented design patterns as typed Rust
//! building blocks.
//!
//! The modules are independent of each other:
//!
//! - [`connection`]: a connection whose operations are delegated to the
//!   handler of its current state (Open or Closed)
//! - [`visitor`]: double dispatch over a two-element hierarchy
//! - [`options`]: functional options and a fluent builder for a server
//! - [`strategy`]: named strategies chosen from a registry at runtime
//! - [`validate`]: field validators that report every violation at once
//!
//! [`core`] holds the `State` trait and the transition history shared by
//! state machines, and [`state_enum!`] declares state enums.
//!
//! # Example
//!
//! ```rust
//! use patterncraft::connection::{Connection, ConnectionError};
//!
//! let mut conn = Connection::new();
//! assert_eq!(conn.describe(), "Closed");
//!
//! conn.open()?;
//! assert_eq!(conn.describe(), "Open");
//! assert_eq!(conn.open(), Err(ConnectionError::AlreadyOpen));
//!
//! conn.close()?;
//! assert_eq!(conn.read(), Err(ConnectionError::ConnectionClosed));
//! # Ok::<(), ConnectionError>(())
//! ```

#[macro_use]
mod macros;

pub mod connection;
pub mod core;
pub mod options;
pub mod strategy;
pub mod validate;
pub mod visitor;

// Re-export commonly used types
pub use crate::connection::{Connection, ConnectionError, ConnectionState};
pub use crate::core::{State, StateHistory, StateTransition};
