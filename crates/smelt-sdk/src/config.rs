use std::path::Path;

use serde::{Deserialize, Serialize};
use smelt_object::ObjectConfig;

use crate::error::{SdkError, SdkResult};

/// Top-level configuration, loadable from TOML.
///
/// ```toml
/// [objects]
/// default_tags = { fixed = ["contact"] }
/// tag_separator = "\n"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmeltConfig {
    pub objects: ObjectConfig,
}

impl SmeltConfig {
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> SdkResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SdkError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> SdkResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
