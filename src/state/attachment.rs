//! Volume attachment synthesis and injection.
//!
//! Attachments are the one resource kind this tool creates rather than
//! reads: Terraform can import instances and volumes, but the attachment
//! linking them has no identifiable counterpart in AWS, so its record is
//! synthesized here and injected directly into the state document.

use std::collections::BTreeMap;

use super::hashcode;
use super::locate::locate;
use super::{PrimaryRecord, ResourceRecord, StateDocument, StateError};

/// Computes the deterministic `vai-…` identifier for an attachment.
///
/// The hashed key is the device name, instance id, and volume id, each
/// followed by a literal hyphen, in that exact order. Ids derived this way
/// already exist in real state files, so both the key layout and the hash
/// are fixed.
#[must_use]
pub fn attachment_id(device_name: &str, instance_id: &str, volume_id: &str) -> String {
    let hash = hashcode::string(&format!("{device_name}-{instance_id}-{volume_id}-"));
    format!("vai-{hash}")
}

/// Builds the attachment record linking an instance and a volume.
///
/// Pure and deterministic: identical inputs yield an identical record, down
/// to the serialized bytes. The record depends on its volume, carries the
/// synthesized id both as the primary id and as the `id` attribute, and
/// starts untainted with no metadata.
#[must_use]
pub fn synthesize(
    instance_id: &str,
    volume_name: &str,
    volume_id: &str,
    device_name: &str,
) -> ResourceRecord {
    let id = attachment_id(device_name, instance_id, volume_id);
    let mut attributes = BTreeMap::new();
    attributes.insert("id".to_string(), id.clone());
    attributes.insert("device_name".to_string(), device_name.to_string());
    attributes.insert("instance_id".to_string(), instance_id.to_string());
    attributes.insert("volume_id".to_string(), volume_id.to_string());

    ResourceRecord {
        kind: "aws_volume_attachment".to_string(),
        dependencies: vec![format!("aws_ebs_volume.{volume_name}")],
        primary: PrimaryRecord {
            id,
            attributes,
            meta: serde_json::Map::new(),
            tainted: false,
        },
        deposed: vec![],
        provider: None,
    }
}

/// Locates the instance and volume, then inserts the synthesized attachment
/// into their module under `aws_volume_attachment.<attachment_name>`.
///
/// Inserting under an existing key overwrites that entry. Every other
/// module and resource is left untouched.
///
/// # Errors
///
/// Returns [`StateError::NotFound`] when no module contains both resources;
/// the document is left unmodified in that case.
pub fn inject(
    document: &mut StateDocument,
    instance_name: &str,
    volume_name: &str,
    attachment_name: &str,
    device_name: &str,
) -> Result<(), StateError> {
    let located = locate(document, instance_name, volume_name)?;
    let record = synthesize(&located.instance_id, volume_name, &located.volume_id, device_name);
    document.modules[located.module_index]
        .resources
        .insert(format!("aws_volume_attachment.{attachment_name}"), record);
    Ok(())
}
