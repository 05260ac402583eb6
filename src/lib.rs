//! Checkout UI extension config builder
//!
//! Builds the deployable configuration for a checkout UI extension by
//! merging the base runtime config, the allow-listed manifest fields and the
//! localization bundle discovered under `<root>/locales/`.

pub mod config;
pub mod context;
pub mod error;
pub mod extension;
pub mod locales;

pub use config::{BaseConfigProvider, ConfigMap, LocaleLimits, ManifestKey, ManifestParser};
pub use context::Context;
pub use error::{CollaboratorError, ExtensionError};
pub use extension::{CheckoutUiExtension, Product, ProductLookup};
pub use locales::{LocaleBundle, LocaleError};
