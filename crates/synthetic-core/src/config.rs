use crate::{
    error::ConfigError,
    naming::{NamingConvention, NamingStyle},
};
use serde::Deserialize;
use std::sync::Arc;

/// Prefix used to derive a field's storage key when none is configured.
pub const DEFAULT_STORAGE_PREFIX: &str = "_";

///
/// SyntheticConfig
///
/// Defaults applied by `ClassBuilder` to fields that do not name their own
/// convention or storage key.
///
/// ```toml
/// naming = "camel"
/// storage_prefix = "__"
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SyntheticConfig {
    pub naming: NamingStyle,
    pub storage_prefix: String,
}

impl SyntheticConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(s)?;

        Ok(config)
    }

    #[must_use]
    pub fn naming_convention(&self) -> Arc<dyn NamingConvention> {
        self.naming.convention()
    }

    #[must_use]
    pub fn storage_key(&self, field: &str) -> String {
        format!("{}{field}", self.storage_prefix)
    }
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            naming: NamingStyle::default(),
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
        }
    }
}

///
/// TESTS
///
