use camino::Utf8PathBuf;

/// A metric name together with the metadata document that declares it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricEntry {
    pub name: String,
    pub source: Utf8PathBuf,
}

impl MetricEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<Utf8PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}
