use super::Host;
use super::common::{ColorMode, LintArgs};
use crate::Result;
use crate::checks::{CheckKind, run_checks};
use crate::reports::{format_status, generate_console, generate_json};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub lint: LintArgs,

    /// Run only the given checks (default is all checks)
    #[arg(long, value_name = "CHECKS", value_delimiter = ',')]
    pub only: Vec<CheckKind>,

    /// Also write the results to a JSON file
    #[arg(long, value_name = "PATH")]
    pub json: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,
}

/// Run the consistency checks and report every finding.
///
/// Exits with status 1 and returns an error when any selected check fails.
pub fn check_metrics<H: Host>(host: &mut H, args: &CheckArgs) -> Result<()> {
    let config = args.lint.setup()?;
    let report = run_checks(&args.lint.root, &config, &args.only)?;

    let mut console_output = String::new();
    generate_console(&report, args.color.use_colors(), &mut console_output)?;
    let _ = write!(host.output(), "{console_output}");

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&report, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to {filename}"))?;
    }

    if report.passed() {
        log::info!("Metrics configuration check {}", format_status(true));
        return Ok(());
    }

    let _ = writeln!(host.error(), "❌ Metrics configuration check {}", format_status(false));
    host.exit(1);
    Err(ohno::AppError::new("metrics configuration is inconsistent"))
}
