//! Command dispatch and handlers.

pub mod diff;
pub mod import;
pub mod show;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Show {
            instance_id,
            volume_name,
            volume_id,
            attachment_name,
            device,
        } => show::run(instance_id, volume_name, volume_id, attachment_name, device),
        Command::Import {
            input,
            output,
            instance_name,
            volume_name,
            attachment_name,
            device,
        } => import::run_with_context(
            ctx,
            input,
            output,
            instance_name,
            volume_name,
            attachment_name,
            device,
        ),
        Command::Diff {
            input,
            color,
            instance_name,
            volume_name,
            attachment_name,
            device,
        } => diff::run_with_context(
            ctx,
            input,
            *color,
            instance_name,
            volume_name,
            attachment_name,
            device,
        ),
    }
}
