//! Boundary-crossing observability.
//!
//! A harness can install a sink to watch each proxy operation as it crosses
//! the boundary. With no sink installed, events are discarded.

/// Which way a proxy operation dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Handled entirely on the fixture side.
    Inbound,
    /// Forwarded to host-implemented code (a capability double or the
    /// host runtime itself).
    Outbound,
}

/// Sink for boundary-crossing events.
///
/// Called synchronously, once per proxy operation, before the operation
/// dispatches.
pub trait TraceSink {
    fn crossing(&self, op: &'static str, direction: Direction);
}

/// Sink that discards every event.
pub struct NullSink;

impl TraceSink for NullSink {
    fn crossing(&self, _op: &'static str, _direction: Direction) {}
}
