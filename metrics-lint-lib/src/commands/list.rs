use super::Host;
use super::common::LintArgs;
use crate::Result;
use crate::metadata::find_all_metric_names;
use crate::transforms::read_effective_renames;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub lint: LintArgs,
}

/// Print the metric registry and the effective renames without judging them.
pub fn list_metrics<H: Host>(host: &mut H, args: &ListArgs) -> Result<()> {
    let config = args.lint.setup()?;
    let root = &args.lint.root;

    let metrics = find_all_metric_names(root, &config.metadata_file_name)?;
    let renames = read_effective_renames(&config.transform_config_path(root))?;

    let mut out = host.output();

    let _ = writeln!(out, "Metrics ({}):", metrics.len());
    let width = metrics.iter().map(|m| m.name.len()).max().unwrap_or(0);
    for entry in &metrics {
        let source = entry.source.strip_prefix(root).unwrap_or(&entry.source);
        let _ = writeln!(out, "  {:<width$}  {source}", entry.name);
    }

    let _ = writeln!(out, "Effective renames ({}):", renames.len());
    let width = renames.iter().map(|r| r.include.len()).max().unwrap_or(0);
    for rule in &renames {
        let _ = writeln!(out, "  {:<width$} -> {}", rule.include, rule.new_name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::LogLevel;
    use crate::commands::host::TestHost;
    use camino::Utf8PathBuf;
    use std::fs;

    #[test]
    fn test_lists_metrics_and_renames() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = Utf8PathBuf::from(temp_dir.path().to_string_lossy().to_string());

        fs::create_dir_all(root.join("receivers/cpu")).expect("Failed to create dir");
        fs::create_dir_all(root.join("config")).expect("Failed to create dir");
        fs::write(root.join("receivers/cpu/metadata.yaml"), "metrics:\n  cpu.load: {}\n  cpu.steal: {}\n").expect("Failed to write");
        fs::write(
            root.join("config/common.yaml"),
            "processors:\n  metricstransform:\n    transforms:\n      - {include: cpu.load, action: update, new_name: agent/cpu/load}\n      - {include: cpu.*, match_type: regexp, action: update, new_name: agent/cpu}\n",
        )
        .expect("Failed to write");

        let mut host = TestHost::new();
        let args = ListArgs {
            lint: LintArgs {
                root,
                config: None,
                transform_config: None,
                log_level: LogLevel::None,
            },
        };
        list_metrics(&mut host, &args).expect("list should succeed");

        insta::assert_snapshot!(host.output_str(), @r"
Metrics (2):
  cpu.load   receivers/cpu/metadata.yaml
  cpu.steal  receivers/cpu/metadata.yaml
Effective renames (1):
  cpu.load -> agent/cpu/load
");
    }
}
