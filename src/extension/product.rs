//! Product lookup used to build the extension's preview cart URL

use crate::context::Context;
use crate::error::CollaboratorError;

/// Quantity placed in the preview cart
pub const CART_QUANTITY: u32 = 1;

/// A shop product, as far as preview URLs are concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub variant_id: u64,
}

/// Finds a product in the given shop to preview the extension against
pub trait ProductLookup {
    fn call(&self, context: &Context, shop: &str) -> Result<Option<Product>, CollaboratorError>;
}

/// Lookup that always answers with the same product (or none)
#[derive(Debug, Clone, Default)]
pub struct FixedProduct {
    product: Option<Product>,
}

impl FixedProduct {
    pub fn new(product: Option<Product>) -> Self {
        Self { product }
    }
}

impl ProductLookup for FixedProduct {
    fn call(&self, _context: &Context, _shop: &str) -> Result<Option<Product>, CollaboratorError> {
        Ok(self.product.clone())
    }
}

/// `/cart/<variant_id>:<quantity>`
pub fn cart_url(product: &Product) -> String {
    format!("/cart/{}:{}", product.variant_id, CART_QUANTITY)
}
