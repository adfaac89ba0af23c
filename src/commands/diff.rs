//! `tfattach diff` command.

use serde_json::Value;

use crate::cli::ColorMode;
use crate::context::ServiceContext;
use crate::ports::io::StateSource;
use crate::state::attachment;
use crate::state::diff::{diff_documents, format_diff};
use crate::state::{parse_document, StateError};
use crate::store::StateStore;

/// Execute the `diff` command with the given service context.
///
/// Runs the same injection as `import` against an in-memory copy of the
/// document and prints the structural difference, comparing against the
/// input bytes as they were read. Nothing is ever written back: diff is
/// read-only with respect to state storage.
///
/// # Errors
///
/// Returns an error string if the document cannot be read or parsed, or if
/// no module contains both named resources.
pub fn run_with_context(
    ctx: &ServiceContext,
    input: &str,
    color: ColorMode,
    instance_name: &str,
    volume_name: &str,
    attachment_name: &str,
    device: &str,
) -> Result<(), String> {
    colored::control::set_override(resolve_colors(color));

    let source = StateSource::from_arg(input);
    let store = StateStore::new(ctx);

    let raw = store.read_raw(&source).map_err(|e| e.to_string())?;
    let location = source.to_string();
    let mut document = parse_document(&raw, &location).map_err(|e| e.to_string())?;
    attachment::inject(&mut document, instance_name, volume_name, attachment_name, device)
        .map_err(|e| e.to_string())?;

    let before: Value = serde_json::from_str(&raw).map_err(|e| {
        StateError::Parse { location, reason: e.to_string() }.to_string()
    })?;
    let after = serde_json::to_value(&document)
        .map_err(|e| StateError::Encode { reason: e.to_string() }.to_string())?;

    println!("{}", format_diff(&diff_documents(&before, &after)));
    Ok(())
}

/// Resolves a color mode into a concrete on/off decision.
fn resolve_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Auto => atty::is(atty::Stream::Stdout),
        ColorMode::Yes => true,
        ColorMode::No => false,
    }
}
