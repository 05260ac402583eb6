//! Top-level error for config builds.

use crate::locales::LocaleError;

/// Error raised by an external collaborator (base config, manifest parser,
/// product lookup). Carried through untouched.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    #[error(transparent)]
    Localization(#[from] LocaleError),

    #[error(transparent)]
    Collaborator(CollaboratorError),
}
