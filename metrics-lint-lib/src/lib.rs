#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for metrics-lint
//!
//! This library checks that a metrics agent's static configuration is internally
//! consistent: every metric a component declares in its `metadata.yaml` must have
//! exactly one rename transform in the shared processing config, no transform may
//! point at a metric that no longer exists, and no metric name may be declared by
//! more than one component.
//!
//! # Module Organization
//!
//! - [`metadata`]: Discovery and parsing of per-component metadata documents
//! - [`transforms`]: Parsing of the shared config and the effective-rename filter
//! - [`checks`]: The transform coverage and duplicate name checks
//! - [`config`]: Tool configuration
//! - [`commands`]: Command-line interface and orchestration
//! - [`reports`]: Console and JSON rendering of check results

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod checks;
pub mod config;
pub mod metadata;
pub mod transforms;

mod yaml;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::checks::{CheckKind, CoverageReport, DuplicatesReport, LintReport, check_duplicate_names, check_transform_coverage};
pub use crate::commands::{Host, run};
pub use crate::config::Config;
