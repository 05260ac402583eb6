//! Base runtime config
//!
//! The base config comes from the extension scaffolding feature, which is
//! outside this crate. `StaticBaseConfig` stands in for it when the base
//! config is already known (a JSON file or a fixed map).

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::{ConfigError, ConfigMap};
use crate::context::Context;
use crate::error::CollaboratorError;

/// Key the base config uses for the renderer package version
pub const RENDERER_VERSION_KEY: &str = "renderer_version";

/// Produces the base config an extension build starts from
pub trait BaseConfigProvider {
    fn config(
        &self,
        context: &Context,
        include_renderer_version: bool,
    ) -> Result<ConfigMap, CollaboratorError>;
}

/// Fixed base config
#[derive(Debug, Clone, Default)]
pub struct StaticBaseConfig {
    fields: ConfigMap,
}

impl StaticBaseConfig {
    pub fn new(fields: ConfigMap) -> Self {
        Self { fields }
    }

    /// Load a JSON object from disk
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ConfigError::ValidationError(format!(
                "base config {} must be a JSON object",
                path.display()
            ))),
        }
    }
}

impl BaseConfigProvider for StaticBaseConfig {
    fn config(
        &self,
        _context: &Context,
        include_renderer_version: bool,
    ) -> Result<ConfigMap, CollaboratorError> {
        let mut fields = self.fields.clone();
        if !include_renderer_version {
            fields.remove(RENDERER_VERSION_KEY);
        }
        Ok(fields)
    }
}
