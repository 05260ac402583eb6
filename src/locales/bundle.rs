//! Localization bundle

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{LocaleError, LocaleTag};

/// A validated, size-checked locale file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    pub relative_path: PathBuf,
    pub tag: LocaleTag,
    pub is_default: bool,
    pub size_bytes: u64,
    pub content: Vec<u8>,
}

/// Base64 translation payloads keyed by locale tag, plus the default locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleBundle {
    pub translations: BTreeMap<LocaleTag, String>,
    pub default_locale: LocaleTag,
}

impl LocaleBundle {
    /// JSON form stored under the `localization` config key
    pub fn to_value(&self) -> Value {
        let translations = self
            .translations
            .iter()
            .map(|(tag, payload)| (tag.to_string(), Value::String(payload.clone())))
            .collect::<serde_json::Map<_, _>>();

        serde_json::json!({
            "translations": translations,
            "default_locale": self.default_locale.as_str(),
        })
    }
}

/// Accumulates accepted files into a bundle
#[derive(Debug, Default)]
pub struct BundleBuilder {
    translations: BTreeMap<LocaleTag, String>,
    sources: BTreeMap<LocaleTag, PathBuf>,
    defaults: Vec<LocaleTag>,
}

impl BundleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode and record one file.
    pub fn add(&mut self, file: &LocaleFile) -> Result<(), LocaleError> {
        if let Some(first) = self.sources.get(&file.tag) {
            return Err(LocaleError::DuplicateLocale {
                tag: file.tag.clone(),
                first: first.clone(),
                second: file.relative_path.clone(),
            });
        }

        let payload = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &file.content);
        self.translations.insert(file.tag.clone(), payload);
        self.sources.insert(file.tag.clone(), file.relative_path.clone());

        if file.is_default {
            self.defaults.push(file.tag.clone());
        }
        Ok(())
    }

    /// Finish the bundle.
    ///
    /// No files means no bundle. Otherwise exactly one file must have been
    /// marked as the default.
    pub fn finish(mut self) -> Result<Option<LocaleBundle>, LocaleError> {
        if self.translations.is_empty() {
            return Ok(None);
        }

        if self.defaults.len() != 1 {
            return Err(LocaleError::SingleDefaultLocale {
                found: self.defaults.len(),
            });
        }

        let default_locale = self.defaults.remove(0);
        Ok(Some(LocaleBundle {
            translations: self.translations,
            default_locale,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file(name: &str, content: &str) -> LocaleFile {
        let parsed = checkout_ext_locale::classify(name).unwrap();
        LocaleFile {
            relative_path: PathBuf::from("locales").join(name),
            tag: parsed.tag,
            is_default: parsed.is_default,
            size_bytes: content.len() as u64,
            content: content.as_bytes().to_vec(),
        }
    }

    fn build(files: &[LocaleFile]) -> Result<Option<LocaleBundle>, LocaleError> {
        let mut builder = BundleBuilder::new();
        for f in files {
            builder.add(f)?;
        }
        builder.finish()
    }

    #[test]
    fn test_encodes_with_standard_base64() {
        let bundle = build(&[
            file("fr.default.json", r#"{"laugh": "mdr"}"#),
            file("en.json", r#"{"laugh": "lol"}"#),
        ])
        .unwrap()
        .unwrap();

        assert_eq!(bundle.default_locale.as_str(), "fr");
        assert_eq!(
            bundle.to_value(),
            json!({
                "translations": {
                    "fr": "eyJsYXVnaCI6ICJtZHIifQ==",
                    "en": "eyJsYXVnaCI6ICJsb2wifQ==",
                },
                "default_locale": "fr",
            })
        );
    }

    #[test]
    fn test_no_line_wrapping() {
        let long = "x".repeat(300);
        let bundle = build(&[file("en.default.json", &long)]).unwrap().unwrap();
        let payload = bundle.translations.values().next().unwrap();
        assert!(!payload.contains('\n'));
        assert_eq!(payload.len(), 400);
    }

    #[test]
    fn test_empty_is_none() {
        assert!(build(&[]).unwrap().is_none());
    }

    #[test]
    fn test_no_default() {
        let err = build(&[file("fr.json", "{}")]).unwrap_err();
        assert!(matches!(err, LocaleError::SingleDefaultLocale { found: 0 }));
    }

    #[test]
    fn test_multiple_defaults() {
        let err = build(&[file("fr.default.json", "{}"), file("en.default.json", "{}")]).unwrap_err();
        assert!(matches!(err, LocaleError::SingleDefaultLocale { found: 2 }));
    }

    #[test]
    fn test_regional_default() {
        let bundle = build(&[file("fr.json", "{}"), file("fr-CA.default.json", "{}")])
            .unwrap()
            .unwrap();
        assert_eq!(bundle.default_locale.as_str(), "fr-CA");
        assert_eq!(bundle.translations.len(), 2);
    }

    #[test]
    fn test_serialize_matches_to_value() {
        let bundle = build(&[file("en.default.json", "{}")]).unwrap().unwrap();
        assert_eq!(serde_json::to_value(&bundle).unwrap(), bundle.to_value());
    }
}
