//! Command-line interface and orchestration for metrics-lint
//!
//! # Commands
//!
//! - **check**: Run the transform coverage and duplicate name checks over an agent
//!   tree, print every finding, and fail when any check fails
//! - **list**: Print the declared metrics and the effective renames for inspection
//! - **init**: Generate a default configuration file
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. Output goes through [`Host`] so commands can be
//! exercised with in-memory buffers.
//!
//! The `common` module holds the arguments shared by `check` and `list`, logging
//! setup, and color mode handling.

mod check;
mod common;
mod host;
mod init;
mod list;
mod run;

pub use check::{CheckArgs, check_metrics};
pub use common::{ColorMode, LintArgs, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use list::{ListArgs, list_metrics};
pub use run::run;
