//! Locale report
//!
//! Describes what a build would bundle without producing the config: one
//! entry per accepted file with its digest, the total raw size and the
//! default locale.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;

use super::{build_bundle, load_locale_files, LocaleError, LocaleFile, LocaleTag};
use crate::config::LocaleLimits;

/// One accepted locale file
#[derive(Debug, Clone, Serialize)]
pub struct LocaleReportEntry {
    /// Path relative to the project root
    pub file: String,
    pub tag: LocaleTag,
    pub is_default: bool,
    pub size_bytes: u64,
    /// SHA-256 of the raw file bytes
    pub sha256: String,
}

/// Summary of the locale files a build would bundle
#[derive(Debug, Clone, Serialize)]
pub struct LocaleReport {
    pub entries: Vec<LocaleReportEntry>,
    pub total_bytes: u64,
    pub limits: LocaleLimits,
    /// None when the project has no locale files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<LocaleTag>,
}

impl LocaleReportEntry {
    fn from_file(file: &LocaleFile) -> Self {
        let sha256 = {
            let mut hasher = Sha256::new();
            hasher.update(&file.content);
            hex::encode(hasher.finalize())
        };

        Self {
            file: file.relative_path.to_string_lossy().to_string(),
            tag: file.tag.clone(),
            is_default: file.is_default,
            size_bytes: file.size_bytes,
            sha256,
        }
    }
}

/// Validate the project's locale files exactly as a build would and
/// describe the result.
pub fn inspect_locales(root: &Path, limits: &LocaleLimits) -> Result<LocaleReport, LocaleError> {
    let files = load_locale_files(root, limits)?;
    let bundle = build_bundle(&files)?;

    Ok(LocaleReport {
        entries: files.iter().map(LocaleReportEntry::from_file).collect(),
        total_bytes: files.iter().map(|f| f.size_bytes).sum(),
        limits: *limits,
        default_locale: bundle.map(|b| b.default_locale),
    })
}

impl LocaleReport {
    /// Convert to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable listing
    pub fn to_human(&self) -> String {
        if self.entries.is_empty() {
            return "No locale files found.".to_string();
        }

        let mut out = format!("Locale files ({} total):\n\n", self.entries.len());
        for entry in &self.entries {
            let marker = if entry.is_default { " (default)" } else { "" };
            out.push_str(&format!("  {}{}\n", entry.tag, marker));
            out.push_str(&format!("    File: {}\n", entry.file));
            out.push_str(&format!("    Size: {} bytes\n", entry.size_bytes));
            out.push_str(&format!("    SHA-256: {}\n", entry.sha256));
        }
        out.push_str(&format!(
            "\nTotal: {} of {} bytes\n",
            self.total_bytes, self.limits.max_bundle_bytes
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("locales")).unwrap();
        fs::write(dir.path().join("locales/en.default.json"), "{}").unwrap();
        fs::write(dir.path().join("locales/fr.json"), "{\"a\":\"b\"}").unwrap();
        dir
    }

    #[test]
    fn test_report_entries() {
        let dir = project();
        let report = inspect_locales(dir.path(), &LocaleLimits::default()).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.total_bytes, 11);
        assert_eq!(report.default_locale.as_ref().map(|t| t.as_str()), Some("en"));

        let en = &report.entries[0];
        assert_eq!(en.file, "locales/en.default.json");
        assert!(en.is_default);
        // SHA-256 of "{}"
        assert_eq!(
            en.sha256,
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn test_report_applies_build_validation() {
        let dir = project();
        fs::write(dir.path().join("locales/de.default.json"), "{}").unwrap();

        let err = inspect_locales(dir.path(), &LocaleLimits::default()).unwrap_err();
        assert!(matches!(err, LocaleError::SingleDefaultLocale { found: 2 }));
    }

    #[test]
    fn test_empty_report() {
        let dir = TempDir::new().unwrap();
        let report = inspect_locales(dir.path(), &LocaleLimits::default()).unwrap();

        assert!(report.entries.is_empty());
        assert!(report.default_locale.is_none());
        assert_eq!(report.to_human(), "No locale files found.");
    }

    #[test]
    fn test_human_and_json_output() {
        let dir = project();
        let report = inspect_locales(dir.path(), &LocaleLimits::default()).unwrap();

        let human = report.to_human();
        assert!(human.contains("en (default)"));
        assert!(human.contains("locales/fr.json"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["default_locale"], "en");
        assert_eq!(json["entries"][1]["tag"], "fr");
        assert_eq!(json["limits"]["max_file_bytes"], 16384);
    }
}
