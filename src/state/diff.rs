//! Structural diffing of serialized state documents.
//!
//! The diff compares parsed JSON values key-by-key and entry-by-entry
//! rather than line-by-line, so a reordered mapping produces no noise and
//! an injected resource shows up as exactly one addition.

use colored::Colorize;
use serde_json::Value;

/// One structural change between two documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// A key or array entry present only in the new document.
    Added {
        /// Path of the added entry.
        path: String,
        /// The added value.
        value: Value,
    },
    /// A key or array entry present only in the old document.
    Removed {
        /// Path of the removed entry.
        path: String,
        /// The removed value.
        value: Value,
    },
    /// A leaf whose value differs between the documents.
    Changed {
        /// Path of the changed leaf.
        path: String,
        /// Value in the old document.
        old: Value,
        /// Value in the new document.
        new: Value,
    },
}

/// All changes between two documents, in traversal order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateDiff {
    /// Individual changes; empty when the documents match structurally.
    pub changes: Vec<Change>,
}

impl StateDiff {
    /// Returns `true` when the documents are structurally identical.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Computes the structural difference between two JSON documents.
///
/// Objects are compared key-by-key and arrays entry-by-entry; a leaf that
/// differs in value or in shape is reported as changed rather than as a
/// remove/add pair.
#[must_use]
pub fn diff_documents(old: &Value, new: &Value) -> StateDiff {
    let mut changes = Vec::new();
    diff_value("", old, new, &mut changes);
    StateDiff { changes }
}

fn diff_value(path: &str, old: &Value, new: &Value, changes: &mut Vec<Change>) {
    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            for (key, old_entry) in old_map {
                let entry_path = join_key(path, key);
                match new_map.get(key) {
                    Some(new_entry) => diff_value(&entry_path, old_entry, new_entry, changes),
                    None => {
                        changes.push(Change::Removed { path: entry_path, value: old_entry.clone() });
                    }
                }
            }
            for (key, new_entry) in new_map {
                if !old_map.contains_key(key) {
                    changes
                        .push(Change::Added { path: join_key(path, key), value: new_entry.clone() });
                }
            }
        }
        (Value::Array(old_items), Value::Array(new_items)) => {
            for (index, (old_item, new_item)) in old_items.iter().zip(new_items).enumerate() {
                diff_value(&format!("{path}[{index}]"), old_item, new_item, changes);
            }
            for (index, item) in new_items.iter().enumerate().skip(old_items.len()) {
                changes.push(Change::Added { path: format!("{path}[{index}]"), value: item.clone() });
            }
            for (index, item) in old_items.iter().enumerate().skip(new_items.len()) {
                changes
                    .push(Change::Removed { path: format!("{path}[{index}]"), value: item.clone() });
            }
        }
        _ if old == new => {}
        _ => changes.push(Change::Changed {
            path: path.to_string(),
            old: old.clone(),
            new: new.clone(),
        }),
    }
}

/// Appends an object key to a path. Keys containing dots are bracketed so
/// resource keys like `aws_instance.web` stay unambiguous next to ordinary
/// `.field` segments.
fn join_key(path: &str, key: &str) -> String {
    if key.contains('.') {
        format!("{path}[\"{key}\"]")
    } else if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Formats a diff as annotated text: `+` for additions, `-` for removals,
/// `~ path: old -> new` for changed leaves.
///
/// Composite added or removed values render as indented JSON blocks with
/// the marker repeated on every line. Whether the markers actually carry
/// color follows the `colored` crate's global override.
#[must_use]
pub fn format_diff(diff: &StateDiff) -> String {
    if diff.is_empty() {
        return "No changes.".to_string();
    }

    let mut lines = Vec::new();
    for change in &diff.changes {
        match change {
            Change::Added { path, value } => {
                for line in entry_lines('+', path, value) {
                    lines.push(line.green().to_string());
                }
            }
            Change::Removed { path, value } => {
                for line in entry_lines('-', path, value) {
                    lines.push(line.red().to_string());
                }
            }
            Change::Changed { path, old, new } => {
                lines.push(format!("~ {path}: {old} -> {new}").yellow().to_string());
            }
        }
    }

    lines.join("\n")
}

/// Renders one added or removed entry, prefixing every line with the marker.
fn entry_lines(marker: char, path: &str, value: &Value) -> Vec<String> {
    let mut result = Vec::new();
    for (index, line) in render_value(value).lines().enumerate() {
        if index == 0 {
            result.push(format!("{marker} {path}: {line}"));
        } else {
            result.push(format!("{marker} {line}"));
        }
    }
    result
}

/// Pretty-prints a value with the document's four-space indentation.
fn render_value(value: &Value) -> String {
    crate::state::to_canonical_json(value)
        .map_or_else(|_| value.to_string(), |rendered| rendered.trim_end().to_string())
}
