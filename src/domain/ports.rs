use crate::domain::model::{
    ProductRecord, ShelfId, ShelfInventoryEntry, ShelfRecord, StockThresholds,
    UtilizationThresholds,
};
use std::borrow::Cow;

/// Read-only source of catalog records.
///
/// Every call returns the current snapshot in its original order. The
/// in-memory store borrows; a remote store would hand back owned data.
pub trait CatalogStore: Send + Sync {
    fn all_products(&self) -> Cow<'_, [ProductRecord]>;

    fn all_shelves(&self) -> Cow<'_, [ShelfRecord]>;

    /// Entries stored on `shelf_id`, or an empty sequence for unknown shelves.
    ///
    /// `shelf_id` goes through [`ShelfId::normalize`]; a label that does not
    /// parse names no shelf.
    fn shelf_inventory(&self, shelf_id: &str) -> Cow<'_, [ShelfInventoryEntry]>;

    fn find_shelf(&self, shelf_id: &str) -> Option<ShelfRecord> {
        let key = ShelfId::normalize(shelf_id)?;
        self.all_shelves()
            .iter()
            .find(|shelf| shelf.id() == key)
            .cloned()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn seed(&self) -> u64;
    fn product_count(&self) -> usize;
    fn page_size(&self) -> usize;
    fn stock_thresholds(&self) -> StockThresholds;
    fn utilization_thresholds(&self) -> UtilizationThresholds;
}
