//! Core library entry for the `tfattach` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod ports;
pub mod state;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Requests for help or version information are printed to standard output
/// and reported as success rather than surfaced as errors.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
