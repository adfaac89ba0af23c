//! Adapter implementations of the port traits.

pub mod live;
pub mod mem;

pub use live::LiveStateIo;
pub use mem::MemIo;
