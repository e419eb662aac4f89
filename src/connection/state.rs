//! Connection states and the handlers that implement them.
//!
//! A handler never owns the connection. It receives the connection as a
//! [`StateContext`] for the duration of one call and installs the next
//! state through [`StateContext::set_state`].

use super::error::ConnectionError;
use super::observer::IoEvent;

state_enum! {
    /// Mode a [`Connection`](super::Connection) is currently in.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum ConnectionState {
        Open,
        #[default]
        Closed,
    }
}

impl ConnectionState {
    /// Handler implementing the operations for this state.
    pub fn handler(&self) -> &'static dyn StateHandler {
        match self {
            Self::Open => &OpenHandler,
            Self::Closed => &ClosedHandler,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// What a handler may do to the connection it is acting on.
pub trait StateContext {
    /// Replace the current state.
    fn set_state(&mut self, next: ConnectionState);

    /// Forward an I/O notification to the connection's observer.
    fn notify(&mut self, event: IoEvent);
}

/// Operation semantics for one connection state.
pub trait StateHandler: Send + Sync {
    fn state(&self) -> ConnectionState;

    fn label(&self) -> &'static str;

    fn open(&self, ctx: &mut dyn StateContext) -> Result<(), ConnectionError>;

    fn read(&self, ctx: &mut dyn StateContext) -> Result<(), ConnectionError>;

    fn write(&self, ctx: &mut dyn StateContext) -> Result<(), ConnectionError>;

    fn close(&self, ctx: &mut dyn StateContext) -> Result<(), ConnectionError>;
}

/// Handler for [`ConnectionState::Open`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenHandler;

impl StateHandler for OpenHandler {
    fn state(&self) -> ConnectionState {
        ConnectionState::Open
    }

    fn label(&self) -> &'static str {
        "Open"
    }

    fn open(&self, _ctx: &mut dyn StateContext) -> Result<(), ConnectionError> {
        Err(ConnectionError::AlreadyOpen)
    }

    fn read(&self, ctx: &mut dyn StateContext) -> Result<(), ConnectionError> {
        ctx.notify(IoEvent::Reading);
        Ok(())
    }

    fn write(&self, ctx: &mut dyn StateContext) -> Result<(), ConnectionError> {
        ctx.notify(IoEvent::Writing);
        Ok(())
    }

    fn close(&self, ctx: &mut dyn StateContext) -> Result<(), ConnectionError> {
        ctx.set_state(ConnectionState::Closed);
        Ok(())
    }
}

/// Handler for [`ConnectionState::Closed`].
///
/// Closing an already closed connection reports
/// [`ConnectionError::ConnectionClosed`], the same error a read or write gets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedHandler;

impl StateHandler for ClosedHandler {
    fn state(&self) -> ConnectionState {
        ConnectionState::Closed
    }

    fn label(&self) -> &'static str {
        "Closed"
    }

    fn open(&self, ctx: &mut dyn StateContext) -> Result<(), ConnectionError> {
        ctx.set_state(ConnectionState::Open);
        Ok(())
    }

    fn read(&self, _ctx: &mut dyn StateContext) -> Result<(), ConnectionError> {
        Err(ConnectionError::ConnectionClosed)
    }

    fn write(&self, _ctx: &mut dyn StateContext) -> Result<(), ConnectionError> {
        Err(ConnectionError::ConnectionClosed)
    }

    fn close(&self, _ctx: &mut dyn StateContext) -> Result<(), ConnectionError> {
        Err(ConnectionError::ConnectionClosed)
    }
}
