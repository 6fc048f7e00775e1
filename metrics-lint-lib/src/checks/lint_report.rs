use super::{CheckKind, CoverageReport, DuplicatesReport, check_duplicate_names, check_transform_coverage};
use crate::Result;
use crate::config::Config;
use camino::{Utf8Path, Utf8PathBuf};
use strum::IntoEnumIterator;

/// Results of a lint run. A check that was not selected is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// The directory that was checked
    pub root: Utf8PathBuf,
    pub coverage: Option<CoverageReport>,
    pub duplicates: Option<DuplicatesReport>,
}

impl LintReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.coverage.as_ref().is_none_or(CoverageReport::passed) && self.duplicates.as_ref().is_none_or(DuplicatesReport::passed)
    }
}

/// Run the selected checks over `root`; an empty selection runs every check.
///
/// # Errors
///
/// Returns an error as soon as any selected check hits an unreadable or malformed file
pub fn run_checks(root: &Utf8Path, config: &Config, selection: &[CheckKind]) -> Result<LintReport> {
    let mut report = LintReport {
        root: root.to_path_buf(),
        coverage: None,
        duplicates: None,
    };

    for kind in CheckKind::iter() {
        if !selection.is_empty() && !selection.contains(&kind) {
            continue;
        }

        match kind {
            CheckKind::Coverage => report.coverage = Some(check_transform_coverage(root, config)?),
            CheckKind::Duplicates => report.duplicates = Some(check_duplicate_names(root, config)?),
        }
    }

    Ok(report)
}
