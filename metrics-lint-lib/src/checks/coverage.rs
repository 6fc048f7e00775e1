use super::LOG_TARGET;
use crate::Result;
use crate::config::Config;
use crate::metadata::{MetricEntry, find_all_metric_names};
use crate::transforms::{TransformRule, read_effective_renames};
use camino::Utf8Path;
use rustc_hash::FxHashMap;

/// Outcome of the transform coverage check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Declared metrics left over once every effective rename claimed one, sorted by name
    pub missing: Vec<MetricEntry>,

    /// Effective renames left over once every declared metric claimed one, sorted by source name
    pub orphaned: Vec<TransformRule>,
}

impl CoverageReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty()
    }
}

/// Compare declared metrics and effective renames as multisets.
///
/// Each rename claims one declared metric with the same name and vice versa, so a
/// metric declared twice needs two renames. Whatever is left unclaimed on either side
/// is reported.
#[must_use]
pub fn compare_coverage(metrics: &[MetricEntry], renames: &[TransformRule]) -> CoverageReport {
    let mut missing = unclaimed(metrics, |m| m.name.as_str(), renames.iter().map(|r| r.include.as_str()));
    let mut orphaned = unclaimed(renames, |r| r.include.as_str(), metrics.iter().map(|m| m.name.as_str()));

    missing.sort();
    orphaned.sort_by(|a, b| a.include.cmp(&b.include).then_with(|| a.new_name.cmp(&b.new_name)));

    CoverageReport { missing, orphaned }
}

fn unclaimed<'a, T: Clone>(items: &'a [T], key: impl Fn(&'a T) -> &'a str, claims: impl Iterator<Item = &'a str>) -> Vec<T> {
    let mut available: FxHashMap<&str, usize> = FxHashMap::default();
    for claim in claims {
        *available.entry(claim).or_default() += 1;
    }

    items
        .iter()
        .filter(|&item| match available.get_mut(key(item)) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}

/// Check that the metadata registry under `root` and the effective renames agree.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked or any document cannot be read or parsed
pub fn check_transform_coverage(root: &Utf8Path, config: &Config) -> Result<CoverageReport> {
    let metrics = find_all_metric_names(root, &config.metadata_file_name)?;
    let renames = read_effective_renames(&config.transform_config_path(root))?;

    let report = compare_coverage(&metrics, &renames);

    log::info!(
        target: LOG_TARGET,
        "Transform coverage: {} metrics, {} effective renames, {} missing, {} orphaned",
        metrics.len(),
        renames.len(),
        report.missing.len(),
        report.orphaned.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(name: &str, source: &str) -> MetricEntry {
        MetricEntry::new(name, source)
    }

    fn rename(include: &str, new_name: &str) -> TransformRule {
        TransformRule {
            action: "update".to_string(),
            include: include.to_string(),
            new_name: new_name.to_string(),
            match_type: String::new(),
        }
    }

    #[test]
    fn test_matching_sets_pass() {
        let metrics = [metric("cpu.load", "cpu/metadata.yaml"), metric("mem.used", "mem/metadata.yaml")];
        let renames = [rename("mem.used", "agent/mem/used"), rename("cpu.load", "agent/cpu/load")];

        let report = compare_coverage(&metrics, &renames);
        assert!(report.passed(), "unexpected findings: {report:?}");
    }

    #[test]
    fn test_metric_without_rename_is_missing() {
        let metrics = [metric("cpu.load", "cpu/metadata.yaml"), metric("disk.iops", "disk/metadata.yaml")];
        let renames = [rename("cpu.load", "agent/cpu/load")];

        let report = compare_coverage(&metrics, &renames);
        assert_eq!(report.missing, vec![metric("disk.iops", "disk/metadata.yaml")]);
        assert!(report.orphaned.is_empty());
    }

    #[test]
    fn test_rename_without_metric_is_orphaned() {
        let metrics = [metric("cpu.load", "cpu/metadata.yaml")];
        let renames = [rename("cpu.load", "agent/cpu/load"), rename("old.metric", "agent/old")];

        let report = compare_coverage(&metrics, &renames);
        assert!(report.missing.is_empty());
        assert_eq!(report.orphaned, vec![rename("old.metric", "agent/old")]);
    }

    #[test]
    fn test_both_sides_reported_together() {
        let metrics = [metric("b.new", "b/metadata.yaml"), metric("a.new", "a/metadata.yaml")];
        let renames = [rename("z.old", "agent/z"), rename("y.old", "agent/y")];

        let report = compare_coverage(&metrics, &renames);
        let missing: Vec<_> = report.missing.iter().map(|m| m.name.as_str()).collect();
        let orphaned: Vec<_> = report.orphaned.iter().map(|r| r.include.as_str()).collect();

        assert_eq!(missing, vec!["a.new", "b.new"]);
        assert_eq!(orphaned, vec!["y.old", "z.old"]);
    }

    #[test]
    fn test_multiplicity_matters() {
        let metrics = [metric("uptime", "a/metadata.yaml"), metric("uptime", "b/metadata.yaml")];

        let one_rename = compare_coverage(&metrics, &[rename("uptime", "agent/uptime")]);
        assert_eq!(one_rename.missing, vec![metric("uptime", "b/metadata.yaml")]);

        let two_renames = compare_coverage(&metrics, &[rename("uptime", "agent/a/uptime"), rename("uptime", "agent/b/uptime")]);
        assert!(two_renames.passed());

        let three_renames = compare_coverage(
            &metrics,
            &[rename("uptime", "agent/a"), rename("uptime", "agent/b"), rename("uptime", "agent/c")],
        );
        assert_eq!(three_renames.orphaned, vec![rename("uptime", "agent/c")]);
    }

    #[test]
    fn test_empty_inputs_pass() {
        assert!(compare_coverage(&[], &[]).passed());
    }
}
