//! Extension manifest (`extension.config.yml`)
//!
//! Only allow-listed top-level keys ever leave the parser; everything else
//! in the manifest is dropped before the merge.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ConfigError, ConfigMap};
use crate::context::Context;
use crate::error::CollaboratorError;

/// Manifest file name, relative to the project root
pub const MANIFEST_FILENAME: &str = "extension.config.yml";

/// Top-level manifest keys a caller may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKey {
    ExtensionPoints,
    Metafields,
    Name,
}

impl ManifestKey {
    /// Keys merged into a checkout UI extension config
    pub const CHECKOUT_UI: [ManifestKey; 3] = [
        ManifestKey::ExtensionPoints,
        ManifestKey::Metafields,
        ManifestKey::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestKey::ExtensionPoints => "extension_points",
            ManifestKey::Metafields => "metafields",
            ManifestKey::Name => "name",
        }
    }
}

/// Parses the project manifest, returning only keys that are both present
/// in the manifest and listed in `allowed_keys`.
pub trait ManifestParser {
    fn parse(&self, context: &Context, allowed_keys: &[ManifestKey])
        -> Result<ConfigMap, CollaboratorError>;
}

/// Reads the manifest from `<root>/extension.config.yml`
#[derive(Debug, Clone, Default)]
pub struct YamlManifest {
    /// Alternate location, relative to the project root
    path: Option<PathBuf>,
}

impl YamlManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the manifest from a different file under the project root
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Parse manifest text and keep the allow-listed keys
    pub fn parse_str(contents: &str, allowed_keys: &[ManifestKey]) -> Result<ConfigMap, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(ConfigMap::new());
        }

        let mut document = match serde_yaml::from_str::<Value>(contents)? {
            Value::Object(map) => map,
            Value::Null => return Ok(ConfigMap::new()),
            _ => {
                return Err(ConfigError::ValidationError(
                    "manifest must be a mapping at the top level".to_string(),
                ))
            }
        };

        let mut selected = ConfigMap::new();
        for key in allowed_keys {
            if let Some(value) = document.remove(key.as_str()) {
                selected.insert(key.as_str().to_string(), value);
            }
        }

        if !document.is_empty() {
            debug!(
                dropped = ?document.keys().collect::<Vec<_>>(),
                "ignoring manifest keys outside the allow-list"
            );
        }

        Ok(selected)
    }
}

impl ManifestParser for YamlManifest {
    fn parse(
        &self,
        context: &Context,
        allowed_keys: &[ManifestKey],
    ) -> Result<ConfigMap, CollaboratorError> {
        let path = context
            .root
            .join(self.path.as_deref().unwrap_or(Path::new(MANIFEST_FILENAME)));

        if !path.is_file() {
            debug!(path = %path.display(), "no manifest found");
            return Ok(ConfigMap::new());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse_str(&contents, allowed_keys)?)
    }
}
