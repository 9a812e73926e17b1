use crate::core::query::Searchable;
use crate::domain::model::{ProductRecord, StockStatus};
use serde::Serialize;

/// Where a product sits in the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductLocation {
    pub sku: String,
    pub name: String,
    pub location: String,
    pub stock: u32,
    pub status: StockStatus,
}

impl From<&ProductRecord> for ProductLocation {
    fn from(product: &ProductRecord) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            location: product.location.clone(),
            stock: product.stock,
            status: product.status,
        }
    }
}

/// Locates products by name, SKU or category.
///
/// A blank term locates nothing; the caller shows a prompt instead of the
/// whole catalog.
pub fn locate(products: &[ProductRecord], term: &str) -> Vec<ProductLocation> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter(|product| product.matches_lowercase(&needle))
        .map(ProductLocation::from)
        .collect()
}
