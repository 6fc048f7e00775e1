use super::LOG_TARGET;
use crate::Result;
use crate::config::Config;
use crate::metadata::{MetricEntry, find_all_metric_names};
use camino::{Utf8Path, Utf8PathBuf};
use rustc_hash::FxHashMap;

/// A metric name declared more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    pub name: String,

    /// Every document declaring the name, in discovery order
    pub sources: Vec<Utf8PathBuf>,
}

/// Outcome of the duplicate name check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicatesReport {
    /// Names declared more than once, sorted by name
    pub duplicates: Vec<DuplicateName>,
}

impl DuplicatesReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Find every name that occurs more than once in the registry.
#[must_use]
pub fn find_duplicates(metrics: &[MetricEntry]) -> DuplicatesReport {
    let mut by_name: FxHashMap<&str, Vec<&Utf8Path>> = FxHashMap::default();
    for entry in metrics {
        by_name.entry(entry.name.as_str()).or_default().push(&entry.source);
    }

    let mut duplicates: Vec<_> = by_name
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(name, sources)| DuplicateName {
            name: name.to_string(),
            sources: sources.into_iter().map(Utf8Path::to_path_buf).collect(),
        })
        .collect();

    duplicates.sort_by(|a, b| a.name.cmp(&b.name));

    DuplicatesReport { duplicates }
}

/// Check that no metric name is declared more than once under `root`.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked or any metadata document cannot be read or parsed
pub fn check_duplicate_names(root: &Utf8Path, config: &Config) -> Result<DuplicatesReport> {
    let metrics = find_all_metric_names(root, &config.metadata_file_name)?;
    let report = find_duplicates(&metrics);

    log::info!(
        target: LOG_TARGET,
        "Duplicate names: {} metrics, {} names declared more than once",
        metrics.len(),
        report.duplicates.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(name: &str, source: &str) -> MetricEntry {
        MetricEntry::new(name, source)
    }

    #[test]
    fn test_unique_names_pass() {
        let metrics = [metric("cpu.load", "cpu/metadata.yaml"), metric("mem.used", "mem/metadata.yaml")];
        assert!(find_duplicates(&metrics).passed());
    }

    #[test]
    fn test_same_name_in_two_components_is_reported() {
        let metrics = [
            metric("uptime", "host/metadata.yaml"),
            metric("cpu.load", "cpu/metadata.yaml"),
            metric("uptime", "proxy/metadata.yaml"),
        ];

        let report = find_duplicates(&metrics);
        assert_eq!(
            report.duplicates,
            vec![DuplicateName {
                name: "uptime".to_string(),
                sources: vec![Utf8PathBuf::from("host/metadata.yaml"), Utf8PathBuf::from("proxy/metadata.yaml")],
            }]
        );
    }

    #[test]
    fn test_every_duplicate_is_reported_sorted() {
        let metrics = [
            metric("z", "a/metadata.yaml"),
            metric("a", "a/metadata.yaml"),
            metric("z", "b/metadata.yaml"),
            metric("a", "b/metadata.yaml"),
            metric("a", "c/metadata.yaml"),
        ];

        let report = find_duplicates(&metrics);
        let names: Vec<_> = report.duplicates.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "z"]);
        assert_eq!(report.duplicates[0].sources.len(), 3);
    }

    #[test]
    fn test_empty_registry_passes() {
        assert!(find_duplicates(&[]).passed());
    }
}
