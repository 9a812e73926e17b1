use crate::utils::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// 依庫存門檻推導狀態
    pub fn from_stock(stock: u32, thresholds: &StockThresholds) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < thresholds.low {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "instock" => Ok(StockStatus::InStock),
            "lowstock" => Ok(StockStatus::LowStock),
            "outofstock" => Ok(StockStatus::OutOfStock),
            _ => Err(CatalogError::validation(format!(
                "unknown stock status '{}', expected in-stock, low-stock or out-of-stock",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThresholds {
    /// Below this the quantity is flagged critical.
    pub critical: u32,
    /// Below this the product counts as low stock.
    pub low: u32,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            critical: 50,
            low: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Critical,
    Warning,
    Healthy,
}

impl StockLevel {
    pub fn classify(stock: u32, thresholds: &StockThresholds) -> Self {
        if stock < thresholds.critical {
            StockLevel::Critical
        } else if stock < thresholds.low {
            StockLevel::Warning
        } else {
            StockLevel::Healthy
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationThresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Default for UtilizationThresholds {
    fn default() -> Self {
        Self {
            warning: 70.0,
            critical: 90.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationLevel {
    Normal,
    Warning,
    Critical,
}

impl UtilizationLevel {
    pub fn classify(percent: f64, thresholds: &UtilizationThresholds) -> Self {
        if percent >= thresholds.critical {
            UtilizationLevel::Critical
        } else if percent >= thresholds.warning {
            UtilizationLevel::Warning
        } else {
            UtilizationLevel::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
    pub location: String,
    pub status: StockStatus,
}

impl ProductRecord {
    pub fn stock_level(&self, thresholds: &StockThresholds) -> StockLevel {
        StockLevel::classify(self.stock, thresholds)
    }

    /// 庫存總值 (單價 × 數量)
    pub fn stock_value(&self) -> Decimal {
        self.price * Decimal::from(self.stock)
    }
}

/// Parsed `<Zone>-<Aisle>-<Slot>` shelf identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShelfId {
    pub zone: String,
    pub aisle: u32,
    pub slot: u32,
}

impl ShelfId {
    /// 將輸入的貨架編號正規化成 `A-1-2` 形式，無法解析時回傳 `None`
    pub fn normalize(raw: &str) -> Option<String> {
        raw.parse::<ShelfId>().ok().map(|id| id.to_string())
    }

    pub fn zone_label(&self) -> String {
        format!("Zone {}", self.zone)
    }
}

impl fmt::Display for ShelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.zone, self.aisle, self.slot)
    }
}

impl FromStr for ShelfId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            CatalogError::validation(format!(
                "'{}' is not a shelf label, expected <Zone>-<Aisle>-<Slot> such as A-1-2",
                s
            ))
        };

        let parts: Vec<&str> = s.trim().split('-').collect();
        let [zone, aisle, slot] = parts.as_slice() else {
            return Err(invalid());
        };

        if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        let aisle: u32 = aisle.parse().map_err(|_| invalid())?;
        let slot: u32 = slot.parse().map_err(|_| invalid())?;
        if aisle == 0 || slot == 0 {
            return Err(invalid());
        }

        Ok(ShelfId {
            zone: zone.to_ascii_uppercase(),
            aisle,
            slot,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfRecord {
    id: String,
    #[serde(skip)]
    shelf_id: ShelfId,
    product_count: u32,
    capacity: u32,
}

impl ShelfRecord {
    pub fn new(id: &str, product_count: u32, capacity: u32) -> Result<Self> {
        let shelf_id: ShelfId = id.parse()?;
        if product_count > capacity {
            return Err(CatalogError::validation(format!(
                "shelf {} holds {} products but has capacity {}",
                shelf_id, product_count, capacity
            )));
        }

        Ok(Self {
            id: shelf_id.to_string(),
            shelf_id,
            product_count,
            capacity,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product_count(&self) -> u32 {
        self.product_count
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn shelf_id(&self) -> &ShelfId {
        &self.shelf_id
    }

    /// Always derived from count and capacity.
    pub fn utilization_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.product_count) / f64::from(self.capacity) * 100.0
    }

    pub fn utilization_rounded(&self) -> u32 {
        self.utilization_percent().round() as u32
    }

    pub fn utilization_level(&self, thresholds: &UtilizationThresholds) -> UtilizationLevel {
        UtilizationLevel::classify(self.utilization_percent(), thresholds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfInventoryEntry {
    pub name: String,
    pub quantity: u32,
    pub sku: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityAction {
    Added,
    Removed,
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityAction::Added => f.write_str("Added"),
            ActivityAction::Removed => f.write_str("Removed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: ActivityAction,
    pub product: String,
    pub shelf: String,
    pub quantity: u32,
    pub user: String,
    pub at: DateTime<Utc>,
}

impl ActivityEntry {
    /// 以 "2 hours ago" 形式顯示距今時間
    pub fn relative_age(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.at);
        let (amount, unit) = if elapsed.num_days() > 0 {
            (elapsed.num_days(), "day")
        } else if elapsed.num_hours() > 0 {
            (elapsed.num_hours(), "hour")
        } else if elapsed.num_minutes() > 0 {
            (elapsed.num_minutes(), "minute")
        } else {
            return "just now".to_string();
        };

        if amount == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", amount, unit)
        }
    }
}
