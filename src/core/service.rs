use crate::core::dashboard::{self, DashboardSummary};
use crate::core::locator::{self, ProductLocation};
use crate::core::pager::{self, Page};
use crate::core::query::{self, ProductQuery};
use crate::core::scan::{self, ShelfDetail};
use crate::core::{CatalogStore, ConfigProvider};
use crate::domain::model::{
    ActivityEntry, ProductRecord, ShelfInventoryEntry, ShelfRecord, StockThresholds,
    UtilizationThresholds,
};
use crate::utils::error::Result;

/// Entry point for every catalog view. Each call re-reads the store
/// snapshot and is free of side effects.
pub struct CatalogService<S: CatalogStore> {
    store: S,
    page_size: usize,
    stock_thresholds: StockThresholds,
    utilization_thresholds: UtilizationThresholds,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S, page_size: usize) -> Self {
        Self {
            store,
            page_size,
            stock_thresholds: StockThresholds::default(),
            utilization_thresholds: UtilizationThresholds::default(),
        }
    }

    pub fn from_config<C: ConfigProvider>(store: S, config: &C) -> Self {
        Self {
            store,
            page_size: config.page_size(),
            stock_thresholds: config.stock_thresholds(),
            utilization_thresholds: config.utilization_thresholds(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn stock_thresholds(&self) -> &StockThresholds {
        &self.stock_thresholds
    }

    pub fn utilization_thresholds(&self) -> &UtilizationThresholds {
        &self.utilization_thresholds
    }

    pub fn search_products(&self, query: &ProductQuery, page: usize) -> Result<Page<ProductRecord>> {
        let products = self.store.all_products();
        let matched = query.apply(&products);
        tracing::debug!(
            "Product query {:?} matched {}/{} records",
            query,
            matched.len(),
            products.len()
        );
        pager::paginate(&matched, self.page_size, page)
    }

    pub fn search_shelves(&self, term: &str) -> Vec<ShelfRecord> {
        let shelves = self.store.all_shelves();
        let matched = query::filter(&shelves, term);
        tracing::debug!("Shelf search '{}' matched {} shelves", term, matched.len());
        matched
    }

    /// Empty for shelves the store does not know.
    pub fn shelf_inventory(&self, shelf_id: &str) -> Vec<ShelfInventoryEntry> {
        let entries = self.store.shelf_inventory(shelf_id).into_owned();
        if entries.is_empty() {
            tracing::debug!("No inventory recorded for shelf '{}'", shelf_id);
        }
        entries
    }

    pub fn locate(&self, term: &str) -> Vec<ProductLocation> {
        locator::locate(&self.store.all_products(), term)
    }

    pub fn scan(&self, manual_entry: &str) -> Result<ShelfDetail> {
        scan::scan(&self.store, manual_entry)
    }

    pub fn dashboard(&self, recent_activity: Vec<ActivityEntry>) -> DashboardSummary {
        dashboard::summarize(&self.store, &self.utilization_thresholds, recent_activity)
    }
}
