//! Terraform state document model and core editing operations.
//!
//! The types here mirror the Terraform 0.x state file layout closely enough
//! to round-trip real documents: field declaration order matches the on-disk
//! order, mappings use sorted keys, and optional sections are preserved when
//! present. Everything the tool never interprets (`remote`, `backend`,
//! module `outputs`, resource `meta`) is carried as opaque JSON.

pub mod attachment;
pub mod diff;
pub mod error;
pub mod hashcode;
pub mod locate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use error::StateError;

/// A full state document: header fields plus the module list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDocument {
    /// State format version.
    #[serde(default)]
    pub version: i64,
    /// Version of the tool that last wrote the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    /// Monotonic write counter.
    #[serde(default)]
    pub serial: i64,
    /// Unique id assigned when the state was first created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineage: Option<String>,
    /// Legacy remote-state configuration, carried opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<Value>,
    /// Backend configuration, carried opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<Value>,
    /// Modules in document order. Required: a document without a module
    /// list is not a state document.
    pub modules: Vec<ModuleState>,
}

/// One module: a named grouping of resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModuleState {
    /// Module address, e.g. `["root"]` or `["root", "network"]`.
    #[serde(default)]
    pub path: Vec<String>,
    /// Module outputs, carried opaquely.
    #[serde(default)]
    pub outputs: Map<String, Value>,
    /// Resources keyed by `"<kind>.<name>"`.
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceRecord>,
    /// Module-level dependencies.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// A tracked resource of a given kind with its primary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Resource kind, e.g. `"aws_instance"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource keys this resource depends on.
    #[serde(rename = "depends_on", default)]
    pub dependencies: Vec<String>,
    /// The realized instance of this resource.
    pub primary: PrimaryRecord,
    /// Superseded instances awaiting destruction.
    #[serde(default)]
    pub deposed: Vec<PrimaryRecord>,
    /// Provider address, when the document records one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// The realized identifier and attributes of a resource instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PrimaryRecord {
    /// Realized identifier in the external system.
    #[serde(default)]
    pub id: String,
    /// Flat key/value attribute set.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Opaque per-instance metadata.
    #[serde(default)]
    pub meta: Map<String, Value>,
    /// Whether the instance is marked for recreation.
    #[serde(default)]
    pub tainted: bool,
}

/// Parses a state document, distinguishing input that is not JSON at all
/// from input that is JSON but lacks the expected document shape.
///
/// `location` names where the raw text came from, for error messages.
///
/// # Errors
///
/// Returns [`StateError::Parse`] for malformed JSON and
/// [`StateError::Structure`] when the JSON does not match the document
/// model (most commonly a missing `modules` list).
pub fn parse_document(raw: &str, location: &str) -> Result<StateDocument, StateError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| StateError::Parse {
        location: location.to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_value(value).map_err(|e| StateError::Structure {
        location: location.to_string(),
        reason: e.to_string(),
    })
}

/// Serializes a value to the canonical document form: four-space
/// indentation and a single trailing newline, so successive outputs diff
/// cleanly line-by-line.
///
/// # Errors
///
/// Returns [`StateError::Encode`] if the value cannot be serialized.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, StateError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| StateError::Encode { reason: e.to_string() })?;
    let mut out =
        String::from_utf8(buf).map_err(|e| StateError::Encode { reason: e.to_string() })?;
    out.push('\n');
    Ok(out)
}
