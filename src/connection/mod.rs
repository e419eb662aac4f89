//! A connection modelled as a state machine.
//!
//! The connection delegates `open`, `read`, `write` and `close` to the
//! handler of its current state. Handlers decide whether the operation is
//! allowed and may install a different state on the connection.
//!
//! | Current | open()         | read()            | write()           | close()          |
//! |---------|----------------|-------------------|-------------------|------------------|
//! | Closed  | → Open         | `ConnectionClosed`| `ConnectionClosed`| `ConnectionClosed`|
//! | Open    | `AlreadyOpen`  | notify "reading"  | notify "writing"  | → Closed         |
//!
//! No real I/O happens here.
//!
//! # Example
//!
//! ```rust
//! use patterncraft::connection::{Connection, ConnectionError, IoEvent};
//!
//! let mut conn = Connection::with_observer(Vec::new());
//! assert_eq!(conn.describe(), "Closed");
//!
//! conn.open()?;
//! conn.write()?;
//! conn.read()?;
//! conn.close()?;
//!
//! assert_eq!(conn.read(), Err(ConnectionError::ConnectionClosed));
//! assert_eq!(conn.observer(), &vec![IoEvent::Writing, IoEvent::Reading]);
//! # Ok::<(), ConnectionError>(())
//! ```

mod error;
mod observer;
mod state;

pub use error::ConnectionError;
pub use observer::{IoEvent, Observer, TracingObserver};
pub use state::{ClosedHandler, ConnectionState, OpenHandler, StateContext, StateHandler};

use crate::core::{State, StateHistory, StateTransition};
use std::fmt;
use tracing::debug;

/// A connection whose behavior depends on its current state.
///
/// New connections start [`ConnectionState::Closed`].
#[derive(Debug)]
pub struct Connection<O = TracingObserver> {
    state: ConnectionState,
    history: StateHistory<ConnectionState>,
    observer: O,
}

impl Connection {
    /// Create a closed connection that reports I/O through `tracing`.
    pub fn new() -> Self {
        Self::with_observer(TracingObserver)
    }
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Observer> Connection<O> {
    /// Create a closed connection reporting I/O to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            state: ConnectionState::Closed,
            history: StateHistory::new(),
            observer,
        }
    }

    /// Label of the current state: `"Open"` or `"Closed"`.
    pub fn describe(&self) -> &'static str {
        self.state.handler().label()
    }

    /// Current state as a value.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Whether the connection is currently open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Successful transitions since creation.
    pub fn history(&self) -> &StateHistory<ConnectionState> {
        &self.history
    }

    /// Observer receiving read and write notifications.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the connection, returning its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Open a closed connection.
    ///
    /// Fails with [`ConnectionError::AlreadyOpen`] if it is already open.
    pub fn open(&mut self) -> Result<(), ConnectionError> {
        self.state.handler().open(self)
    }

    /// Read from an open connection, notifying [`IoEvent::Reading`].
    ///
    /// Fails with [`ConnectionError::ConnectionClosed`] when closed.
    pub fn read(&mut self) -> Result<(), ConnectionError> {
        self.state.handler().read(self)
    }

    /// Write to an open connection, notifying [`IoEvent::Writing`].
    ///
    /// Fails with [`ConnectionError::ConnectionClosed`] when closed.
    pub fn write(&mut self) -> Result<(), ConnectionError> {
        self.state.handler().write(self)
    }

    /// Close an open connection.
    ///
    /// Fails with [`ConnectionError::ConnectionClosed`] if it is already
    /// closed, the same error a read or write gets.
    pub fn close(&mut self) -> Result<(), ConnectionError> {
        self.state.handler().close(self)
    }
}

impl<O: Observer> StateContext for Connection<O> {
    fn set_state(&mut self, next: ConnectionState) {
        debug!(from = self.state.name(), to = next.name(), "connection state changed");
        self.history.push(StateTransition::now(self.state, next));
        self.state = next;
    }

    fn notify(&mut self, event: IoEvent) {
        self.observer.notify(event);
    }
}

impl<O: Observer> fmt::Display for Connection<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
