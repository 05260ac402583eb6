//! Checkout UI extension type
//!
//! Config build sequence:
//! 1. Base config from the provider, without the renderer version
//! 2. Manifest fields restricted to the checkout UI allow-list
//! 3. Localization bundle from `<root>/locales/`
//! 4. Union of the three; manifest values win over base values

mod product;

pub use product::{cart_url, FixedProduct, Product, ProductLookup, CART_QUANTITY};

use tracing::debug;

use crate::config::{merge_layers, BaseConfigProvider, ConfigMap, LocaleLimits, ManifestKey, ManifestParser};
use crate::context::Context;
use crate::error::ExtensionError;
use crate::locales::collect_localization;

/// Identifier the partner API uses for this extension kind
pub const GRAPHQL_IDENTIFIER: &str = "CHECKOUT_UI_EXTENSION";

/// Config key holding the localization bundle
pub const LOCALIZATION_KEY: &str = "localization";

/// Builds configs for checkout UI extensions
#[derive(Debug, Clone, Default)]
pub struct CheckoutUiExtension {
    limits: LocaleLimits,
}

impl CheckoutUiExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use different locale size ceilings for this extension's builds
    pub fn with_limits(mut self, limits: LocaleLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn graphql_identifier(&self) -> &'static str {
        GRAPHQL_IDENTIFIER
    }

    /// Build the deployable config for the project in `context`.
    ///
    /// Collaborator errors are returned as they were raised; nothing is
    /// returned on failure.
    pub fn config(
        &self,
        context: &Context,
        base: &dyn BaseConfigProvider,
        manifest: &dyn ManifestParser,
    ) -> Result<ConfigMap, ExtensionError> {
        let base_fields = base
            .config(context, false)
            .map_err(ExtensionError::Collaborator)?;

        let manifest_fields = manifest
            .parse(context, &ManifestKey::CHECKOUT_UI)
            .map_err(ExtensionError::Collaborator)?;

        debug!(
            base_keys = base_fields.len(),
            manifest_keys = manifest_fields.len(),
            root = %context.root.display(),
            "merging extension config"
        );

        let mut layers = vec![base_fields, manifest_fields];
        if let Some(bundle) = collect_localization(context.root(), &self.limits)? {
            let mut localization = ConfigMap::new();
            localization.insert(LOCALIZATION_KEY.to_string(), bundle.to_value());
            layers.push(localization);
        }

        Ok(merge_layers(layers))
    }

    /// Preview cart URL for a product from `shop`, if the shop has one.
    pub fn build_resource_url(
        &self,
        context: &Context,
        shop: &str,
        lookup: &dyn ProductLookup,
    ) -> Result<Option<String>, ExtensionError> {
        let product = lookup
            .call(context, shop)
            .map_err(ExtensionError::Collaborator)?;
        Ok(product.as_ref().map(cart_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_identifier() {
        assert_eq!(CheckoutUiExtension::new().graphql_identifier(), "CHECKOUT_UI_EXTENSION");
    }
}
