//! Argument handling and setup shared between the check and list commands.

use crate::Result;
use crate::config::Config;
use camino::Utf8PathBuf;
use clap::Args;
use clap::ValueEnum;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared between the check and list commands
#[derive(Args, Debug, Clone)]
pub struct LintArgs {
    /// Root directory of the metrics agent to check
    #[arg(long, default_value = ".", value_name = "PATH")]
    pub root: Utf8PathBuf,

    /// Path to configuration file (default is `metrics-lint.toml` in the root)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Shared processing config holding the rename transforms, relative to the root
    #[arg(long, value_name = "PATH")]
    pub transform_config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

impl LintArgs {
    /// Initialize logging and load the effective configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded or is invalid
    pub fn setup(&self) -> Result<Config> {
        init_logging(self.log_level);

        let mut config = Config::load(&self.root, self.config.as_ref())?;
        if let Some(transform_config) = &self.transform_config {
            config.transform_config.clone_from(transform_config);
            config.validate()?;
        }

        log::debug!(
            "Checking '{}' with metadata file name '{}' and transform config '{}'",
            self.root,
            config.metadata_file_name,
            config.transform_config_path(&self.root)
        );

        Ok(config)
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when commands run more than once in one process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
