use super::common::display_path;
use crate::Result;
use crate::checks::{CheckKind, CoverageReport, DuplicatesReport, LintReport};
use camino::Utf8Path;
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(report: &LintReport, use_colors: bool, writer: &mut W) -> Result<()> {
    if let Some(coverage) = &report.coverage {
        write_heading(writer, CheckKind::Coverage, coverage.passed(), use_colors)?;
        write_coverage(writer, &report.root, coverage, use_colors)?;
    }

    if let Some(duplicates) = &report.duplicates {
        write_heading(writer, CheckKind::Duplicates, duplicates.passed(), use_colors)?;
        write_duplicates(writer, &report.root, duplicates, use_colors)?;
    }

    Ok(())
}

fn write_heading<W: Write>(writer: &mut W, kind: CheckKind, passed: bool, use_colors: bool) -> Result<()> {
    let name = kind.to_string();
    match (passed, use_colors) {
        (true, true) => writeln!(writer, "✔️ {}", name.green().bold())?,
        (true, false) => writeln!(writer, "✔️ {name}")?,
        (false, true) => writeln!(writer, "🗙 {}", name.red().bold())?,
        (false, false) => writeln!(writer, "🗙 {name}")?,
    }
    Ok(())
}

fn write_coverage<W: Write>(writer: &mut W, root: &Utf8Path, coverage: &CoverageReport, use_colors: bool) -> Result<()> {
    if !coverage.missing.is_empty() {
        writeln!(writer, "  Metrics without a rename transform:")?;
        for entry in &coverage.missing {
            let source = display_path(root, &entry.source);
            if use_colors {
                writeln!(writer, "    {} ({source})", entry.name.yellow())?;
            } else {
                writeln!(writer, "    {} ({source})", entry.name)?;
            }
        }
    }

    if !coverage.orphaned.is_empty() {
        writeln!(writer, "  Transforms with no matching metric:")?;
        for rule in &coverage.orphaned {
            if use_colors {
                writeln!(writer, "    {} -> {}", rule.include.yellow(), rule.new_name)?;
            } else {
                writeln!(writer, "    {} -> {}", rule.include, rule.new_name)?;
            }
        }
    }

    Ok(())
}

fn write_duplicates<W: Write>(writer: &mut W, root: &Utf8Path, duplicates: &DuplicatesReport, use_colors: bool) -> Result<()> {
    for duplicate in &duplicates.duplicates {
        let count = duplicate.sources.len();
        if use_colors {
            writeln!(writer, "  {} is declared {count} times:", duplicate.name.yellow())?;
        } else {
            writeln!(writer, "  {} is declared {count} times:", duplicate.name)?;
        }

        for source in &duplicate.sources {
            writeln!(writer, "    {}", display_path(root, source))?;
        }
    }

    Ok(())
}
