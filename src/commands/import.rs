//! `tfattach import` command.

use crate::context::ServiceContext;
use crate::ports::io::{StateSink, StateSource};
use crate::state::attachment;
use crate::store::StateStore;

/// Execute the `import` command with the given service context.
///
/// Reads the state document, locates the module holding the named instance
/// and volume, injects the synthesized attachment there, and writes the
/// full updated document. Nothing is written unless every step before the
/// write succeeds. Success is silent, so an `--output -` run emits only
/// the document itself.
///
/// # Errors
///
/// Returns an error string if the document cannot be read or parsed, if no
/// module contains both named resources, or if the result cannot be
/// written.
pub fn run_with_context(
    ctx: &ServiceContext,
    input: &str,
    output: &str,
    instance_name: &str,
    volume_name: &str,
    attachment_name: &str,
    device: &str,
) -> Result<(), String> {
    let source = StateSource::from_arg(input);
    let sink = StateSink::from_arg(output);
    let store = StateStore::new(ctx);

    let mut document = store.load(&source).map_err(|e| e.to_string())?;
    attachment::inject(&mut document, instance_name, volume_name, attachment_name, device)
        .map_err(|e| e.to_string())?;
    store.save(&sink, &document).map_err(|e| e.to_string())
}
