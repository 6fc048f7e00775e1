//! Report generation for lint results
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: Terminal output, optionally colored
//! - **JSON**: Machine-readable structured data for CI tooling
//!
//! Both operate on a [`LintReport`](crate::checks::LintReport) and list every
//! finding, with metadata paths shown relative to the checked root.

mod common;
mod console;
mod json;

pub use common::format_status;
pub use console::generate as generate_console;
pub use json::generate as generate_json;
