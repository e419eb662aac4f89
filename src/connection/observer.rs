//! Observers for I/O notifications emitted by an open connection.

use std::fmt;
use tracing::info;

/// Notification emitted by a successful read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoEvent {
    Reading,
    Writing,
}

impl IoEvent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Writing => "writing",
        }
    }
}

impl fmt::Display for IoEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives the I/O notifications of a connection.
pub trait Observer {
    fn notify(&mut self, event: IoEvent);
}

/// Default observer: forwards each event to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&mut self, event: IoEvent) {
        info!(event = %event, "{}", event);
    }
}

/// Collects events in arrival order.
impl Observer for Vec<IoEvent> {
    fn notify(&mut self, event: IoEvent) {
        self.push(event);
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn notify(&mut self, event: IoEvent) {
        (**self).notify(event);
    }
}
