//! Localization bundling
//!
//! Collects the translation files under `<root>/locales/` into a bundle of
//! base64 payloads keyed by locale tag. Steps, in order, per file:
//! 1. Scan direct children of the locales directory (sorted by name)
//! 2. Validate the filename against the locale grammar
//! 3. Enforce the per-file and running aggregate size ceilings
//! 4. Add the file to the bundle
//!
//! Any failure aborts the whole collection; no partial bundle is produced.

mod bundle;
mod report;
mod scan;
mod size;

pub use bundle::{BundleBuilder, LocaleBundle, LocaleFile};
pub use report::{inspect_locales, LocaleReport, LocaleReportEntry};
pub use scan::{scan_locales, ScannedFile};
pub use size::SizeEnforcer;

pub use checkout_ext_locale::{FilenameError, LocaleTag};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::LocaleLimits;

/// Errors raised while collecting locale files
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error(transparent)]
    InvalidFilename(#[from] FilenameError),

    #[error("Locale file {filename} is {size_bytes} bytes, which exceeds the {limit_bytes} byte limit")]
    FileTooLarge {
        filename: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("Locale files total {total_bytes} bytes, which exceeds the {limit_bytes} byte bundle limit")]
    BundleTooLarge { total_bytes: u64, limit_bytes: u64 },

    #[error(
        "Exactly one locale file must be marked as default (e.g. en.default.json), found {found}"
    )]
    SingleDefaultLocale { found: usize },

    /// Two accepted files resolve to the same tag (`fr.json` and
    /// `fr.default.json`). Rejected instead of letting one payload silently
    /// replace the other, which is stricter than a plain tag-keyed merge.
    #[error(
        "Locale {tag} is defined by both {} and {}; keep one file per locale",
        first.display(),
        second.display()
    )]
    DuplicateLocale {
        tag: LocaleTag,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Walk error: {0}")]
    WalkError(#[from] walkdir::Error),
}

/// Scan, validate and size-check every locale file under `root`.
///
/// A file is only opened after its name and size have been accepted.
/// Returns the accepted files in discovery order. An empty vector means the
/// project has no locales directory or it holds no files.
pub fn load_locale_files(root: &Path, limits: &LocaleLimits) -> Result<Vec<LocaleFile>, LocaleError> {
    let mut enforcer = SizeEnforcer::new(*limits);
    let mut files = Vec::new();

    for scanned in scan_locales(root)? {
        let name = checkout_ext_locale::classify(&scanned.file_name)?;
        let size_bytes = scanned.size_bytes;
        enforcer.admit(&scanned.file_name, size_bytes)?;
        let content = fs::read(&scanned.path)?;

        debug!(
            file = %scanned.relative_path.display(),
            tag = %name.tag,
            is_default = name.is_default,
            size_bytes,
            "accepted locale file"
        );

        files.push(LocaleFile {
            relative_path: scanned.relative_path,
            tag: name.tag,
            is_default: name.is_default,
            size_bytes,
            content,
        });
    }

    Ok(files)
}

/// Run the full localization pipeline for the project at `root`.
///
/// `Ok(None)` when there is nothing to bundle.
pub fn collect_localization(
    root: &Path,
    limits: &LocaleLimits,
) -> Result<Option<LocaleBundle>, LocaleError> {
    let files = load_locale_files(root, limits)?;
    let bundle = build_bundle(&files)?;

    if let Some(ref bundle) = bundle {
        info!(
            locales = bundle.translations.len(),
            default_locale = %bundle.default_locale,
            "built localization bundle"
        );
    }

    Ok(bundle)
}

/// Aggregate already-accepted files into a bundle
pub fn build_bundle(files: &[LocaleFile]) -> Result<Option<LocaleBundle>, LocaleError> {
    let mut builder = BundleBuilder::new();
    for file in files {
        builder.add(file)?;
    }
    builder.finish()
}
