//! Locale directory scanner
//!
//! Only direct children of `<root>/locales/` are considered. Nested
//! directories and everything below them are skipped without error, as are
//! hidden entries (`.DS_Store`, `.gitkeep`).
//!
//! The scan only stats files. Contents are read later, once a file has
//! passed the filename and size checks.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::LocaleError;
use crate::context::LOCALES_DIR;

/// A file found directly under the locales directory
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Bare file name, e.g. `fr.default.json`
    pub file_name: String,
    /// Path relative to the project root, e.g. `locales/fr.default.json`
    pub relative_path: PathBuf,
    /// Absolute path used to read the file once accepted
    pub path: PathBuf,
    /// Size on disk in bytes
    pub size_bytes: u64,
}

/// List the files directly under `<root>/locales/`, sorted by name.
///
/// A missing locales directory yields an empty list.
pub fn scan_locales(root: &Path) -> Result<Vec<ScannedFile>, LocaleError> {
    let dir = root.join(LOCALES_DIR);
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "no locales directory");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
    {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if file_name.starts_with('.') {
            debug!(path = %entry.path().display(), "skipping hidden entry in locales directory");
            continue;
        }

        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipping non-file entry in locales directory");
            continue;
        }

        let size_bytes = entry.metadata()?.len();

        files.push(ScannedFile {
            relative_path: Path::new(LOCALES_DIR).join(&file_name),
            path: entry.path().to_path_buf(),
            file_name,
            size_bytes,
        });
    }

    Ok(files)
}
