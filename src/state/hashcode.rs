//! 32-bit string hashcode for synthetic resource identifiers.

/// Hashes a string the way Terraform derives resource hashcodes: the IEEE
/// CRC-32 checksum of the UTF-8 bytes, used as a non-negative decimal.
///
/// Identifiers built from this value must stay byte-compatible with ids
/// already present in state files written by other tools, so the algorithm
/// is fixed and pinned by tests.
#[must_use]
pub fn string(value: &str) -> u32 {
    crc32fast::hash(value.as_bytes())
}
