pub mod dashboard;
pub mod export;
pub mod generator;
pub mod locator;
pub mod pager;
pub mod query;
pub mod scan;
pub mod service;
pub mod store;

pub use crate::domain::model::{
    ProductRecord, ShelfInventoryEntry, ShelfRecord, StockStatus, StockThresholds,
    UtilizationThresholds,
};
pub use crate::domain::ports::{CatalogStore, ConfigProvider};
pub use crate::utils::error::Result;
pub use generator::MockCatalogGenerator;
pub use service::CatalogService;
pub use store::InMemoryCatalog;
