//! State store — reads and writes state documents through the I/O port.
//!
//! All I/O goes through `ctx.io` so that commands behave identically
//! against the real disk, the standard streams, and the in-memory test
//! adapter. The store maps raw port failures into the typed error taxonomy
//! and always renders documents in the canonical form.

use crate::context::ServiceContext;
use crate::ports::io::{StateSink, StateSource};
use crate::state::{parse_document, to_canonical_json, StateDocument, StateError};

/// Persistence layer for state documents.
pub struct StateStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StateStore<'a> {
    /// Creates a store backed by the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reads the raw contents of a source without parsing them.
    ///
    /// Diffing needs the original bytes verbatim; everything else goes
    /// through [`StateStore::load`].
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Read`] naming the source if it cannot be read.
    pub fn read_raw(&self, source: &StateSource) -> Result<String, StateError> {
        self.ctx.io.read_to_string(source).map_err(|e| StateError::Read {
            location: source.to_string(),
            reason: e.to_string(),
        })
    }

    /// Reads and parses a state document from a source.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Read`] if the source cannot be read, or the
    /// parse failure from [`parse_document`] if its contents are malformed.
    pub fn load(&self, source: &StateSource) -> Result<StateDocument, StateError> {
        let raw = self.read_raw(source)?;
        parse_document(&raw, &source.to_string())
    }

    /// Serializes a document canonically and writes it to a sink.
    ///
    /// The write happens only after the entire document has been encoded,
    /// so a failed run never leaves a partially written sink.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Encode`] if serialization fails, or
    /// [`StateError::Write`] naming the sink if the write fails.
    pub fn save(&self, sink: &StateSink, document: &StateDocument) -> Result<(), StateError> {
        let rendered = to_canonical_json(document)?;
        self.ctx.io.write(sink, &rendered).map_err(|e| StateError::Write {
            location: sink.to_string(),
            reason: e.to_string(),
        })
    }
}
