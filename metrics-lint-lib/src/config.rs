//! Tool configuration.
//!
//! A configuration file is optional. When none is given, `metrics-lint.toml` in the
//! checked root is used if present, and the built-in defaults otherwise.

use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

/// Name of the configuration file looked up in the checked root
pub const CONFIG_FILE_NAME: &str = "metrics-lint.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base name of the per-component metadata documents
    #[serde(default = "default_metadata_file_name")]
    pub metadata_file_name: String,

    /// Path of the shared processing config, relative to the root unless absolute
    #[serde(default = "default_transform_config")]
    pub transform_config: Utf8PathBuf,
}

fn default_metadata_file_name() -> String {
    "metadata.yaml".to_string()
}

fn default_transform_config() -> Utf8PathBuf {
    Utf8PathBuf::from("config/common.yaml")
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(root: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading metrics-lint configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = root.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading metrics-lint configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Where the shared processing config lives for a given root
    #[must_use]
    pub fn transform_config_path(&self, root: &Utf8Path) -> Utf8PathBuf {
        if self.transform_config.is_absolute() {
            self.transform_config.clone()
        } else {
            root.join(&self.transform_config)
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata file name is not a plain file name or the transform path is empty
    pub fn validate(&self) -> Result<()> {
        if self.metadata_file_name.is_empty() {
            return Err(app_err!("metadata_file_name must not be empty"));
        }

        if self.metadata_file_name.contains(['/', '\\']) {
            return Err(app_err!(
                "metadata_file_name must be a file name, not a path, got '{}'",
                self.metadata_file_name
            ));
        }

        if self.transform_config.as_str().is_empty() {
            return Err(app_err!("transform_config must not be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_file_name: default_metadata_file_name(),
            transform_config: default_transform_config(),
        }
    }
}
