//! `tfattach show` command.

use std::collections::BTreeMap;

use crate::state::attachment;
use crate::state::{to_canonical_json, StateError};

/// Execute the `show` command.
///
/// Prints the attachment record that `import` would inject for the given
/// identifiers, wrapped under its resource key. No state document is read;
/// the caller supplies the realized ids directly.
///
/// # Errors
///
/// Returns an error string if the record cannot be encoded.
pub fn run(
    instance_id: &str,
    volume_name: &str,
    volume_id: &str,
    attachment_name: &str,
    device: &str,
) -> Result<(), String> {
    let rendered = render(instance_id, volume_name, volume_id, attachment_name, device)
        .map_err(|e| e.to_string())?;
    print!("{rendered}");
    Ok(())
}

/// Renders the wrapped record in the canonical document form.
fn render(
    instance_id: &str,
    volume_name: &str,
    volume_id: &str,
    attachment_name: &str,
    device: &str,
) -> Result<String, StateError> {
    let record = attachment::synthesize(instance_id, volume_name, volume_id, device);
    let mut wrapped = BTreeMap::new();
    wrapped.insert(format!("aws_volume_attachment.{attachment_name}"), record);
    to_canonical_json(&wrapped)
}
