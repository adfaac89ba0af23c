//! State locator: finds the module tracking both halves of an attachment.

use super::error::StateError;
use super::StateDocument;

/// A successful location: the module plus the realized identifiers of the
/// instance and volume found inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Index of the module in document order.
    pub module_index: usize,
    /// Realized id of the `aws_instance` resource.
    pub instance_id: String,
    /// Realized id of the `aws_ebs_volume` resource.
    pub volume_id: String,
}

/// Finds the first module (in document order) containing both
/// `aws_instance.<instance_name>` and `aws_ebs_volume.<volume_name>`.
///
/// A module holding only the instance does not stop the scan; a later
/// module may hold both. When several modules qualify, the first wins —
/// downstream users depend on first-match semantics, so a second match is
/// deliberately not detected.
///
/// # Errors
///
/// Returns [`StateError::NotFound`] naming both resource keys when no
/// module contains the pair.
pub fn locate(
    document: &StateDocument,
    instance_name: &str,
    volume_name: &str,
) -> Result<Located, StateError> {
    let instance_key = format!("aws_instance.{instance_name}");
    let volume_key = format!("aws_ebs_volume.{volume_name}");

    for (module_index, module) in document.modules.iter().enumerate() {
        if let Some(instance) = module.resources.get(&instance_key) {
            if let Some(volume) = module.resources.get(&volume_key) {
                return Ok(Located {
                    module_index,
                    instance_id: instance.primary.id.clone(),
                    volume_id: volume.primary.id.clone(),
                });
            }
        }
    }

    Err(StateError::NotFound { instance_key, volume_key })
}
