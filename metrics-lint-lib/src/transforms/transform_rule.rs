use serde::{Deserialize, Deserializer};

/// The action that renames a metric in place
pub const ACTION_UPDATE: &str = "update";

/// Literal matching; an empty match type means the same thing
pub const MATCH_TYPE_STRICT: &str = "strict";

/// One entry of `processors.metricstransform.transforms`.
///
/// Absent and null fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransformRule {
    #[serde(deserialize_with = "null_as_empty")]
    pub action: String,

    /// Source metric name, or a pattern when `match_type` is not strict
    #[serde(deserialize_with = "null_as_empty")]
    pub include: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub new_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub match_type: String,
}

impl TransformRule {
    /// Whether this rule renames exactly one literal metric.
    ///
    /// Non-update actions, empty sources or targets, and pattern matching all fall
    /// outside the one-rule-per-metric correspondence.
    #[must_use]
    pub fn is_effective_rename(&self) -> bool {
        self.action == ACTION_UPDATE
            && !self.include.is_empty()
            && !self.new_name.is_empty()
            && (self.match_type.is_empty() || self.match_type == MATCH_TYPE_STRICT)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
