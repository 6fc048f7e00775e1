use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, bail};
use serde::de::DeserializeOwned;
use std::fs;

/// Read a YAML document from disk and decode it into `T`.
///
/// The file is opened, read, and closed within this call. A file with no YAML
/// content, such as an empty or comment-only one, is an error.
pub fn read_yaml_file<T: DeserializeOwned>(path: &Utf8Path) -> Result<T> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading '{path}'"))?;

    let value: serde_yaml::Value = serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML document '{path}'"))?;
    if value.is_null() {
        bail!("YAML document '{path}' has no content");
    }

    serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML document '{path}'"))
}
