use super::{LOG_TARGET, MetricEntry, find_metadata, read_metric_names};
use crate::Result;
use camino::Utf8Path;

/// Collect every metric declared by every metadata document below `root`.
///
/// Entries keep discovery order and are not deduplicated; a name declared by two
/// components appears twice.
pub fn find_all_metric_names(root: &Utf8Path, file_name: &str) -> Result<Vec<MetricEntry>> {
    let files = find_metadata(root, file_name)?;

    let mut entries = Vec::new();
    for path in &files {
        entries.extend(read_metric_names(path)?);
    }

    log::info!(
        target: LOG_TARGET,
        "Found {} metrics across {} metadata documents under '{root}'",
        entries.len(),
        files.len()
    );

    Ok(entries)
}
