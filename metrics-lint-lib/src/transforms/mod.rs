//! The shared processing config and its metric rename rules.
//!
//! Only the `processors.metricstransform.transforms` list is read. Of those rules,
//! the ones that rename exactly one literal metric are the *effective renames*
//! that must line up with the metadata registry.

mod processing_config;
mod transform_rule;

pub use processing_config::{MetricsTransform, ProcessingConfig, Processors, read_effective_renames};
pub use transform_rule::{ACTION_UPDATE, MATCH_TYPE_STRICT, TransformRule};

const LOG_TARGET: &str = "transforms";
