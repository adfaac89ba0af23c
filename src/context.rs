//! Service context bundling the port trait objects.

use crate::adapters::live::LiveStateIo;
use crate::ports::io::StateIo;

/// Bundles the port trait objects used by command handlers.
///
/// The single port is state document I/O. Constructors wire up different
/// adapter implementations (live disk/stream access, or in-memory for
/// tests).
pub struct ServiceContext {
    /// State document storage.
    pub io: Box<dyn StateIo>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem and streams.
    #[must_use]
    pub fn live() -> Self {
        Self { io: Box::new(LiveStateIo) }
    }

    /// Creates a context backed by the given adapter.
    #[must_use]
    pub fn with_io(io: Box<dyn StateIo>) -> Self {
        Self { io }
    }
}
