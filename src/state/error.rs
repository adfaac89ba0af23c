//! Failure taxonomy for state document operations.

use thiserror::Error;

/// A terminal failure while reading, editing, or writing a state document.
///
/// Every variant is deterministic for a given input; nothing here is worth
/// retrying. Messages carry the detail needed to identify the failing
/// location or resource keys.
#[derive(Debug, Error)]
pub enum StateError {
    /// The input document could not be read at all.
    #[error("Failed to read state from {location}: {reason}")]
    Read {
        /// Where the read was attempted.
        location: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The input was not valid JSON.
    #[error("Failed to parse state from {location} as JSON: {reason}")]
    Parse {
        /// Where the document came from.
        location: String,
        /// Underlying parse failure.
        reason: String,
    },

    /// The input parsed as JSON but lacks the modules/resources shape.
    #[error("State from {location} is not a Terraform state document: {reason}")]
    Structure {
        /// Where the document came from.
        location: String,
        /// What was missing or malformed.
        reason: String,
    },

    /// No module jointly contains the named instance and volume resources.
    #[error("Could not locate a module containing both \"{instance_key}\" and \"{volume_key}\"")]
    NotFound {
        /// The instance resource key that was sought.
        instance_key: String,
        /// The volume resource key that was sought.
        volume_key: String,
    },

    /// The output document could not be written.
    #[error("Failed to write state to {location}: {reason}")]
    Write {
        /// Where the write was attempted.
        location: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The document could not be serialized.
    #[error("Failed to encode state as JSON: {reason}")]
    Encode {
        /// Underlying serialization failure.
        reason: String,
    },
}
