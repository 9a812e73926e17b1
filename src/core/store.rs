use crate::core::CatalogStore;
use crate::domain::model::{ProductRecord, ShelfId, ShelfInventoryEntry, ShelfRecord};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_unique;
use std::borrow::Cow;
use std::collections::HashMap;

/// Snapshot catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<ProductRecord>,
    shelves: Vec<ShelfRecord>,
    inventory: HashMap<String, Vec<ShelfInventoryEntry>>,
}

impl InMemoryCatalog {
    /// 建立目錄快照並檢查唯一性
    pub fn new(
        products: Vec<ProductRecord>,
        shelves: Vec<ShelfRecord>,
        inventory: HashMap<String, Vec<ShelfInventoryEntry>>,
    ) -> Result<Self> {
        validate_unique("product id", products.iter().map(|p| p.id.as_str()))?;
        validate_unique("sku", products.iter().map(|p| p.sku.as_str()))?;
        validate_unique("shelf id", shelves.iter().map(|s| s.id()))?;

        // 庫存表的鍵統一成正規化的貨架編號
        let mut normalized = HashMap::with_capacity(inventory.len());
        for (shelf_id, entries) in inventory {
            let key = ShelfId::normalize(&shelf_id)
                .filter(|key| shelves.iter().any(|shelf| shelf.id() == key))
                .ok_or_else(|| {
                    CatalogError::validation(format!(
                        "inventory references unknown shelf '{}'",
                        shelf_id
                    ))
                })?;
            if normalized.contains_key(&key) {
                return Err(CatalogError::DuplicateId {
                    field: "inventory shelf id".to_string(),
                    value: key,
                });
            }
            normalized.insert(key, entries);
        }

        tracing::debug!(
            "Catalog snapshot: {} products, {} shelves, {} stocked shelves",
            products.len(),
            shelves.len(),
            normalized.len()
        );

        Ok(Self {
            products,
            shelves,
            inventory: normalized,
        })
    }
}

impl CatalogStore for InMemoryCatalog {
    fn all_products(&self) -> Cow<'_, [ProductRecord]> {
        Cow::Borrowed(&self.products)
    }

    fn all_shelves(&self) -> Cow<'_, [ShelfRecord]> {
        Cow::Borrowed(&self.shelves)
    }

    fn shelf_inventory(&self, shelf_id: &str) -> Cow<'_, [ShelfInventoryEntry]> {
        match ShelfId::normalize(shelf_id).and_then(|key| self.inventory.get(&key)) {
            Some(entries) => Cow::Borrowed(entries.as_slice()),
            None => Cow::Borrowed(&[]),
        }
    }
}
