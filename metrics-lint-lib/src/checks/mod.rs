//! The two consistency checks.
//!
//! - **Transform coverage** compares the metric registry against the effective
//!   renames as multisets: every declared metric needs exactly one rename and every
//!   rename needs a declared metric.
//! - **Duplicate names** requires each metric name to be declared by exactly one
//!   metadata document across the whole tree.
//!
//! Each check scans and parses the tree on its own; nothing is shared or cached
//! between them. Violations are reported as values, while unreadable or malformed
//! files surface as errors.

mod check_kind;
mod coverage;
mod duplicates;
mod lint_report;

pub use check_kind::CheckKind;
pub use coverage::{CoverageReport, check_transform_coverage, compare_coverage};
pub use duplicates::{DuplicateName, DuplicatesReport, check_duplicate_names, find_duplicates};
pub use lint_report::{LintReport, run_checks};

const LOG_TARGET: &str = "checks";
