use super::{LOG_TARGET, TransformRule};
use crate::Result;
use crate::yaml::read_yaml_file;
use camino::Utf8Path;
use serde::Deserialize;

/// The shared processing config, reduced to the metric transform rules.
///
/// Receivers, exporters, pipelines and every other processor are ignored. Missing
/// sections mean there are no transforms.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessingConfig {
    #[serde(default)]
    pub processors: Processors,
}

#[derive(Debug, Default, Deserialize)]
pub struct Processors {
    #[serde(default)]
    pub metricstransform: MetricsTransform,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetricsTransform {
    #[serde(default)]
    pub transforms: Vec<TransformRule>,
}

impl ProcessingConfig {
    /// Load the shared processing config from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid processing config
    pub fn load(path: &Utf8Path) -> Result<Self> {
        read_yaml_file(path)
    }

    /// Every transform rule, in document order
    #[must_use]
    pub fn transforms(&self) -> &[TransformRule] {
        &self.processors.metricstransform.transforms
    }

    /// The rules that rename exactly one literal metric, in document order
    pub fn effective_renames(&self) -> impl Iterator<Item = &TransformRule> {
        self.transforms().iter().filter(|rule| rule.is_effective_rename())
    }
}

/// Read the effective rename rules from the shared processing config at `path`.
pub fn read_effective_renames(path: &Utf8Path) -> Result<Vec<TransformRule>> {
    let config = ProcessingConfig::load(path)?;
    let renames: Vec<_> = config.effective_renames().cloned().collect();

    log::info!(
        target: LOG_TARGET,
        "'{path}' holds {} transforms, {} of them effective renames",
        config.transforms().len(),
        renames.len()
    );

    Ok(renames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;

    const COMMON_YAML: &str = r"
receivers:
  mountstats:
    collection_interval: 60s

processors:
  batch: {}
  metricstransform:
    transforms:
      - include: nfs.mount.read_bytes
        action: update
        new_name: agent/nfs/mount/read_bytes
      - include: nfs.mount.write_bytes
        match_type: strict
        action: update
        new_name: agent/nfs/mount/write_bytes
      - include: ^nfs\.debug\..*$
        match_type: regexp
        action: update
        new_name: agent/nfs/debug
      - include: nfs.mount.ops
        action: insert
        new_name: agent/nfs/mount/ops_copy
      - include: nfs.legacy
        action: delete
      - include: slab.objects
        action: update
        operations:
          - action: add_label
            new_label: cache
            new_value: dentry

service:
  pipelines:
    metrics:
      receivers: [mountstats]
      processors: [metricstransform, batch]
";

    fn write_config(dir: &tempfile::TempDir, text: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from(dir.path().to_string_lossy().to_string()).join("common.yaml");
        fs::write(&path, text).expect("Failed to write config");
        path
    }

    #[test]
    fn test_parses_all_transforms() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, COMMON_YAML);

        let config = ProcessingConfig::load(&path).expect("config should parse");
        assert_eq!(config.transforms().len(), 6);
        assert_eq!(config.transforms()[2].match_type, "regexp");
    }

    #[test]
    fn test_keeps_only_effective_renames() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, COMMON_YAML);

        let renames = read_effective_renames(&path).expect("config should parse");
        let includes: Vec<_> = renames.iter().map(|r| r.include.as_str()).collect();

        assert_eq!(includes, vec!["nfs.mount.read_bytes", "nfs.mount.write_bytes"]);
    }

    #[test]
    fn test_missing_sections_mean_no_transforms() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let path = write_config(&temp_dir, "receivers:\n  hostmetrics: {}\n");
        assert!(read_effective_renames(&path).expect("config should parse").is_empty());

        let path = write_config(&temp_dir, "processors:\n  batch: {}\n");
        assert!(read_effective_renames(&path).expect("config should parse").is_empty());
    }

    #[test]
    fn test_malformed_config_fails() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, "processors:\n  metricstransform:\n    transforms: {include: x\n");

        let result = read_effective_renames(&path);
        assert!(result.is_err(), "broken YAML must abort");
    }

    #[test]
    fn test_config_without_content_fails() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        for text in ["", "# truncated\n"] {
            let path = write_config(&temp_dir, text);
            let err = read_effective_renames(&path).unwrap_err();
            assert!(err.to_string().contains("common.yaml"), "error should name the file: {err}");
        }
    }

    #[test]
    fn test_missing_config_fails() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = Utf8PathBuf::from(temp_dir.path().to_string_lossy().to_string()).join("common.yaml");

        let result = read_effective_renames(&path);
        assert!(result.is_err(), "a missing shared config must abort");
    }
}
