//! Configuration for config builds
//!
//! - Locale size limits (built-in defaults, optionally overridden from TOML)
//! - Top-level merge of base config and manifest fields
//! - Collaborator seams: base config provider and manifest parser

mod base;
mod limits;
mod manifest;
mod merge;

pub use base::{BaseConfigProvider, StaticBaseConfig, RENDERER_VERSION_KEY};
pub use limits::{LocaleLimits, LIMITS_FILENAME, L10N_BUNDLE_SIZE_LIMIT, L10N_FILE_SIZE_LIMIT};
pub use manifest::{ManifestKey, ManifestParser, YamlManifest, MANIFEST_FILENAME};
pub use merge::{merge_layers, overlay, ConfigMap};

use std::io;

/// Errors loading configuration files from disk
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to parse YAML manifest: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
