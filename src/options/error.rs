//! Build errors for the server builder.

use thiserror::Error;

/// Errors that can occur when building a server.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Server name not specified. Call .name(name) before .build()")]
    MissingName,

    #[error("Server port not specified. Call .port(port) before .build()")]
    MissingPort,
}
