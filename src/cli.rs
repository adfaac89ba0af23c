//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `tfattach`.
#[derive(Debug, Parser)]
#[command(
    name = "tfattach",
    version,
    about = "Import synthetic AWS EBS volume attachments into Terraform state",
    long_about = "Terraform can import AWS instances and EBS volumes, but not the \
                  synthetic aws_volume_attachment resource linking them, since an \
                  attachment has no identifiable counterpart in AWS. This tool edits \
                  the state file directly: it locates the instance and the volume, \
                  derives the attachment's deterministic id, and injects the new \
                  resource record."
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the record that import would inject, without reading any state.
    Show {
        /// EC2 instance id (e.g. i-abc123).
        instance_id: String,
        /// Name of the `aws_ebs_volume` resource in your Terraform code.
        volume_name: String,
        /// EBS volume id (e.g. vol-123abc).
        volume_id: String,
        /// Name of the `aws_volume_attachment` resource in your Terraform code.
        attachment_name: String,
        /// Device name recorded on the attachment (e.g. /dev/sdg).
        device: String,
    },
    /// Inject a volume attachment into a state document and write the result.
    Import {
        /// Read existing state from this file; `-` means standard input.
        #[arg(short, long, default_value = "terraform.tfstate")]
        input: String,
        /// Write updated state to this file; `-` means standard output.
        #[arg(short, long, default_value = "terraform.tfstate")]
        output: String,
        /// Name of the `aws_instance` resource in your Terraform code.
        instance_name: String,
        /// Name of the `aws_ebs_volume` resource in your Terraform code.
        volume_name: String,
        /// Name of the `aws_volume_attachment` resource in your Terraform code.
        attachment_name: String,
        /// Device name recorded on the attachment (e.g. /dev/sdg).
        device: String,
    },
    /// Print the changes import would make, without writing anything.
    Diff {
        /// Read existing state from this file; `-` means standard input.
        #[arg(short, long, default_value = "terraform.tfstate")]
        input: String,
        /// When to color the output.
        #[arg(short, long, value_enum, default_value_t = ColorMode::Auto)]
        color: ColorMode,
        /// Name of the `aws_instance` resource in your Terraform code.
        instance_name: String,
        /// Name of the `aws_ebs_volume` resource in your Terraform code.
        volume_name: String,
        /// Name of the `aws_volume_attachment` resource in your Terraform code.
        attachment_name: String,
        /// Device name recorded on the attachment (e.g. /dev/sdg).
        device: String,
    },
}

/// When diff output is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color only when standard output is a terminal.
    Auto,
    /// Always color.
    Yes,
    /// Never color.
    No,
}
