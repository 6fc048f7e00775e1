use super::Host;
use crate::Result;
use crate::config::{CONFIG_FILE_NAME, Config};
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path (default is `metrics-lint.toml` in the current directory)
    #[arg(value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub output: Utf8PathBuf,
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    Config::save_default(&args.output)?;
    let _ = writeln!(host.output(), "Generated default configuration file: {}", args.output);
    Ok(())
}
