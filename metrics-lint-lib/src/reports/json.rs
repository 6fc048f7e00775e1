use super::common::display_path;
use crate::Result;
use crate::checks::{CoverageReport, DuplicatesReport, LintReport};
use camino::Utf8Path;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(report: &LintReport, writer: &mut W) -> Result<()> {
    let output = json!({
        "root": report.root.as_str(),
        "passed": report.passed(),
        "coverage": report.coverage.as_ref().map(|c| coverage_to_json(&report.root, c)),
        "duplicates": report.duplicates.as_ref().map(|d| duplicates_to_json(&report.root, d)),
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn coverage_to_json(root: &Utf8Path, coverage: &CoverageReport) -> serde_json::Value {
    json!({
        "passed": coverage.passed(),
        "missing": coverage.missing.iter().map(|entry| json!({
            "name": entry.name,
            "source": display_path(root, &entry.source).as_str(),
        })).collect::<Vec<_>>(),
        "orphaned": coverage.orphaned.iter().map(|rule| json!({
            "include": rule.include,
            "new_name": rule.new_name,
        })).collect::<Vec<_>>(),
    })
}

fn duplicates_to_json(root: &Utf8Path, duplicates: &DuplicatesReport) -> serde_json::Value {
    json!({
        "passed": duplicates.passed(),
        "duplicates": duplicates.duplicates.iter().map(|duplicate| json!({
            "name": duplicate.name,
            "sources": duplicate.sources.iter().map(|s| display_path(root, s).as_str()).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
    })
}
