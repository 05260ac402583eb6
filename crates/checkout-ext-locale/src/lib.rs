//! Locale filename grammar for checkout UI extension translations.
//!
//! Translation files live directly under a project's `locales/` directory and
//! are named `<tag>.json` or `<tag>.default.json`. A tag is two or three
//! lowercase ASCII letters, optionally followed by a dash and a two-letter
//! uppercase region (`fr`, `fr-CA`, `haw`).
//!
//! The grammar is a single declarative pattern so that the accepted and
//! rejected sets can be checked in isolation from the filesystem.

use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;
use serde::Serialize;

/// Anchored grammar for a full locale filename.
const FILENAME_GRAMMAR: &str = r"^(?P<tag>[a-z]{2,3}(?:-[A-Z]{2})?)(?P<default>\.default)?\.json$";

/// Error for names that do not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error(
        "Invalid locale filename '{filename}': expected <language>[-<REGION>][.default].json, \
         e.g. fr.json, fr-CA.json or en.default.json"
    )]
    Invalid { filename: String },
}

/// A validated locale tag such as `fr` or `fr-CA`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// The tag as written in the filename.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of an accepted locale filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFilename {
    pub tag: LocaleTag,
    pub is_default: bool,
}

/// Matcher for locale filenames.
#[derive(Debug)]
pub struct FilenamePattern {
    regex: Regex,
}

impl FilenamePattern {
    /// Process-wide compiled pattern.
    pub fn get() -> &'static FilenamePattern {
        static PATTERN: OnceLock<FilenamePattern> = OnceLock::new();
        PATTERN.get_or_init(|| FilenamePattern {
            regex: Regex::new(FILENAME_GRAMMAR).expect("locale filename grammar is a valid regex"),
        })
    }

    /// Classify a bare filename as a default or non-default locale file.
    pub fn classify(&self, filename: &str) -> Result<LocaleFilename, FilenameError> {
        let caps = self
            .regex
            .captures(filename)
            .ok_or_else(|| FilenameError::Invalid {
                filename: filename.to_string(),
            })?;

        let tag = caps
            .name("tag")
            .map(|m| LocaleTag(m.as_str().to_string()))
            .ok_or_else(|| FilenameError::Invalid {
                filename: filename.to_string(),
            })?;

        Ok(LocaleFilename {
            tag,
            is_default: caps.name("default").is_some(),
        })
    }
}

/// Classify `filename` with the process-wide pattern.
pub fn classify(filename: &str) -> Result<LocaleFilename, FilenameError> {
    FilenamePattern::get().classify(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID_FILENAMES: &[&str] = &[
        "FR-CA.json",     // uppercase language
        "french.json",    // language longer than 3
        "fren-CA.json",   // language longer than 3
        "fr.defalt.json", // misspelled marker
        "11-CA.json",     // digits in language
        "fr.CA.json",     // dot as region separator
        "fr_CA.json",     // underscore as region separator
    ];

    #[test]
    fn test_rejects_fixture_list() {
        for name in INVALID_FILENAMES {
            assert_eq!(
                classify(name),
                Err(FilenameError::Invalid {
                    filename: name.to_string()
                }),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_accepts_plain_tags() {
        for name in ["fr.json", "en.json", "haw.json", "fr-CA.json", "pt-BR.json"] {
            let parsed = classify(name).unwrap();
            assert!(!parsed.is_default, "{} should not be default", name);
        }
        assert_eq!(classify("fr-CA.json").unwrap().tag.as_str(), "fr-CA");
    }

    #[test]
    fn test_accepts_default_marker() {
        let parsed = classify("fr.default.json").unwrap();
        assert_eq!(parsed.tag.as_str(), "fr");
        assert!(parsed.is_default);

        let parsed = classify("en-GB.default.json").unwrap();
        assert_eq!(parsed.tag.as_str(), "en-GB");
        assert!(parsed.is_default);
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(classify("fr.txt").is_err());
        assert!(classify("fr.JSON").is_err());
        assert!(classify("fr.json.bak").is_err());
        assert!(classify("fr").is_err());
    }

    #[test]
    fn test_rejects_marker_variants() {
        assert!(classify("fr.Default.json").is_err());
        assert!(classify("fr.DEFAULT.json").is_err());
        assert!(classify("fr-default.json").is_err());
        assert!(classify("fr.default.default.json").is_err());
        assert!(classify("default.json").is_err());
    }

    #[test]
    fn test_rejects_tag_length_and_region_shape() {
        assert!(classify("f.json").is_err());
        assert!(classify("fr-C.json").is_err());
        assert!(classify("fr-CAN.json").is_err());
        assert!(classify("fr-ca.json").is_err());
        assert!(classify("fr-12.json").is_err());
    }

    #[test]
    fn test_rejects_paths_and_padding() {
        assert!(classify("locales/fr.json").is_err());
        assert!(classify(" fr.json").is_err());
        assert!(classify("fr.json\n").is_err());
        assert!(classify("").is_err());
    }

    #[test]
    fn test_tag_display() {
        let tag = classify("fr-CA.default.json").unwrap().tag;
        assert_eq!(tag.to_string(), "fr-CA");
        assert_eq!(tag.as_str(), "fr-CA");
    }
}
