//! Locale size limits
//!
//! Built-in ceilings can be overridden per project from a TOML file:
//!
//! ```toml
//! [localization]
//! max_file_bytes = 16384
//! max_bundle_bytes = 262144
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::ConfigError;

/// Maximum raw size of a single locale file (16 KiB)
pub const L10N_FILE_SIZE_LIMIT: u64 = 16 * 1024;

/// Maximum raw size of all locale files together (256 KiB)
pub const L10N_BUNDLE_SIZE_LIMIT: u64 = 256 * 1024;

/// Project-level override file, looked up in the project root
pub const LIMITS_FILENAME: &str = ".checkout-ext.toml";

/// Raw byte ceilings applied while collecting locale files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleLimits {
    /// Per-file ceiling in bytes
    pub max_file_bytes: u64,
    /// Ceiling for the running total across accepted files
    pub max_bundle_bytes: u64,
}

impl Default for LocaleLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: L10N_FILE_SIZE_LIMIT,
            max_bundle_bytes: L10N_BUNDLE_SIZE_LIMIT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LimitsFile {
    #[serde(default)]
    localization: LocaleLimits,
}

impl LocaleLimits {
    pub fn new(max_file_bytes: u64, max_bundle_bytes: u64) -> Self {
        Self {
            max_file_bytes,
            max_bundle_bytes,
        }
    }

    /// Override the per-file ceiling
    pub fn with_max_file_bytes(mut self, bytes: u64) -> Self {
        self.max_file_bytes = bytes;
        self
    }

    /// Override the aggregate ceiling
    pub fn with_max_bundle_bytes(mut self, bytes: u64) -> Self {
        self.max_bundle_bytes = bytes;
        self
    }

    /// Load limits from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse limits from TOML. Missing table or keys keep the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: LimitsFile = toml::from_str(s)?;
        file.localization.validate()?;
        Ok(file.localization)
    }

    /// Load `<root>/.checkout-ext.toml` if present, defaults otherwise
    pub fn for_project(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(LIMITS_FILENAME);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Both ceilings must be non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "localization.max_file_bytes must be greater than 0".to_string(),
            ));
        }
        if self.max_bundle_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "localization.max_bundle_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let limits = LocaleLimits::default();
        assert_eq!(limits.max_file_bytes, 16 * 1024);
        assert_eq!(limits.max_bundle_bytes, 256 * 1024);
    }

    #[test]
    fn test_builder_overrides() {
        let limits = LocaleLimits::default()
            .with_max_file_bytes(50)
            .with_max_bundle_bytes(70);
        assert_eq!(limits, LocaleLimits::new(50, 70));
    }

    #[test]
    fn test_parse_full_table() {
        let limits = LocaleLimits::from_toml_str(
            r#"
[localization]
max_file_bytes = 100
max_bundle_bytes = 1000
"#,
        )
        .unwrap();
        assert_eq!(limits, LocaleLimits::new(100, 1000));
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let limits = LocaleLimits::from_toml_str("[localization]\nmax_file_bytes = 100\n").unwrap();
        assert_eq!(limits.max_file_bytes, 100);
        assert_eq!(limits.max_bundle_bytes, L10N_BUNDLE_SIZE_LIMIT);
    }

    #[test]
    fn test_missing_table_is_default() {
        let limits = LocaleLimits::from_toml_str("").unwrap();
        assert_eq!(limits, LocaleLimits::default());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = LocaleLimits::from_toml_str("[localization]\nmax_bundle_bytes = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = LocaleLimits::from_toml_str("[localization\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlError(_)));
    }

    #[test]
    fn test_for_project() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            LocaleLimits::for_project(dir.path()).unwrap(),
            LocaleLimits::default()
        );

        fs::write(
            dir.path().join(LIMITS_FILENAME),
            "[localization]\nmax_file_bytes = 10\nmax_bundle_bytes = 20\n",
        )
        .unwrap();
        assert_eq!(
            LocaleLimits::for_project(dir.path()).unwrap(),
            LocaleLimits::new(10, 20)
        );
    }
}
