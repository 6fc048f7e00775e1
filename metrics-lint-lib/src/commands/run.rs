//! Command dispatch logic for metrics-lint

use super::{CheckArgs, InitArgs, ListArgs, check_metrics, init_config, list_metrics};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "metrics-lint", version, author, long_about = None)]
#[command(about = "Check that a metrics agent's metadata and rename transforms agree")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: LintSubcommand,
}

#[derive(Subcommand, Debug)]
enum LintSubcommand {
    /// Check transform coverage and metric name uniqueness
    Check(Box<CheckArgs>),
    /// List declared metrics and effective renames
    List(ListArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        LintSubcommand::Check(check_args) => check_metrics(host, check_args),
        LintSubcommand::List(list_args) => list_metrics(host, list_args),
        LintSubcommand::Init(init_args) => init_config(host, init_args),
    }
}
