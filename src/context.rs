//! Per-invocation project context handed to every collaborator.

use std::path::{Path, PathBuf};

/// Directory, relative to the project root, holding translation files.
pub const LOCALES_DIR: &str = "locales";

/// The project a config build runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Project root directory
    pub root: PathBuf,
}

impl Context {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
