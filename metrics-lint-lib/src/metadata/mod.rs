//! Discovery and parsing of per-component metadata documents.
//!
//! Each component of a metrics agent ships a `metadata.yaml` whose `metrics` mapping
//! declares the metrics it emits. This module finds those documents under a root
//! directory and turns them into a flat registry of [`MetricEntry`] values.

mod metadata_document;
mod metric_entry;
mod registry;
mod scanner;

pub use metadata_document::{MetadataDocument, read_metric_names};
pub use metric_entry::MetricEntry;
pub use registry::find_all_metric_names;
pub use scanner::find_metadata;

const LOG_TARGET: &str = "metadata";
