//! Connection operation errors.

use thiserror::Error;

/// Errors returned when an operation is not allowed in the current state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConnectionError {
    /// `open()` on a connection that is already open
    #[error("connection already open")]
    AlreadyOpen,

    /// `read()`, `write()` or `close()` on a closed connection
    #[error("connection closed")]
    ConnectionClosed,
}
