use crate::core::CatalogStore;
use crate::domain::model::{ActivityEntry, StockStatus, UtilizationLevel, UtilizationThresholds};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub active_locations: usize,
    pub low_stock_items: usize,
    pub total_units: u64,
    pub inventory_value: Decimal,
    pub shelves_near_capacity: usize,
    pub recent_activity: Vec<ActivityEntry>,
}

/// 彙整首頁統計數字
pub fn summarize<S: CatalogStore + ?Sized>(
    store: &S,
    thresholds: &UtilizationThresholds,
    recent_activity: Vec<ActivityEntry>,
) -> DashboardSummary {
    let products = store.all_products();
    let shelves = store.all_shelves();

    let low_stock_items = products
        .iter()
        .filter(|product| product.status != StockStatus::InStock)
        .count();
    let total_units: u64 = products.iter().map(|product| u64::from(product.stock)).sum();
    let inventory_value: Decimal = products
        .iter()
        .map(|product| product.stock_value())
        .sum();
    let shelves_near_capacity = shelves
        .iter()
        .filter(|shelf| shelf.utilization_level(thresholds) == UtilizationLevel::Critical)
        .count();

    DashboardSummary {
        total_products: products.len(),
        active_locations: shelves.len(),
        low_stock_items,
        total_units,
        inventory_value,
        shelves_near_capacity,
        recent_activity,
    }
}
