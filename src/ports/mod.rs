//! Port traits defining external boundaries.
//!
//! The only boundary this tool has is state document storage (files or the
//! standard streams). Implementations live in `src/adapters/`.

pub mod io;

pub use io::{StateIo, StateSink, StateSource};
