use super::{LOG_TARGET, MetricEntry};
use crate::Result;
use crate::yaml::read_yaml_file;
use camino::Utf8Path;
use core::fmt;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;

/// The part of a component's metadata document this tool reads.
///
/// Everything but the keys of `metrics` is ignored, including the per-metric descriptors.
/// A key repeated within `metrics` makes the document invalid.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataDocument {
    #[serde(default, deserialize_with = "unique_metric_names")]
    metrics: Option<BTreeSet<String>>,
}

impl MetadataDocument {
    /// Load a metadata document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid metadata document
    pub fn load(path: &Utf8Path) -> Result<Self> {
        read_yaml_file(path)
    }

    /// Names of the metrics this document declares
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().flatten().map(String::as_str)
    }
}

fn unique_metric_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BTreeSet<String>>, D::Error> {
    deserializer.deserialize_option(MetricNamesVisitor)
}

struct MetricNamesVisitor;

impl<'de> Visitor<'de> for MetricNamesVisitor {
    type Value = Option<BTreeSet<String>>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a mapping of metric names to descriptors")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut names = BTreeSet::new();
        while let Some(name) = map.next_key::<String>()? {
            let _: IgnoredAny = map.next_value()?;
            if names.contains(&name) {
                return Err(de::Error::custom(format!("metric '{name}' is declared more than once")));
            }
            let _ = names.insert(name);
        }
        Ok(Some(names))
    }
}

/// Read the metric names declared by the metadata document at `path`.
///
/// A document without a `metrics` mapping declares nothing.
pub fn read_metric_names(path: &Utf8Path) -> Result<Vec<MetricEntry>> {
    let doc = MetadataDocument::load(path)?;
    let entries: Vec<_> = doc.metric_names().map(|name| MetricEntry::new(name, path)).collect();

    log::debug!(target: LOG_TARGET, "'{path}' declares {} metrics", entries.len());
    Ok(entries)
}
