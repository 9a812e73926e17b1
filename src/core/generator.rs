use crate::core::{ConfigProvider, InMemoryCatalog};
use crate::domain::model::{
    ActivityAction, ActivityEntry, ProductRecord, ShelfInventoryEntry, ShelfRecord, StockStatus,
    StockThresholds,
};
use crate::utils::error::Result;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashMap;

const PRODUCT_NAMES: [&str; 8] = [
    "Industrial Widget A",
    "Safety Helmet Pro",
    "Cable Assembly Kit",
    "Mounting Hardware Set",
    "Precision Tool",
    "Electronic Component",
    "Mechanical Part",
    "Assembly Unit",
];

const CATEGORIES: [&str; 4] = ["Electronics", "Safety", "Hardware", "Tools"];

// (shelf, products, capacity)
const SHELVES: [(&str, u32, u32); 5] = [
    ("A-1-1", 12, 15),
    ("A-1-2", 8, 15),
    ("A-2-1", 15, 15),
    ("B-1-1", 6, 20),
    ("B-2-2", 18, 20),
];

/// Builds the demo catalog from an injected random source.
#[derive(Debug, Clone)]
pub struct MockCatalogGenerator {
    product_count: usize,
    thresholds: StockThresholds,
}

impl MockCatalogGenerator {
    pub fn new(product_count: usize, thresholds: StockThresholds) -> Self {
        Self {
            product_count,
            thresholds,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.product_count(), config.stock_thresholds())
    }

    pub fn generate_products<R: Rng>(&self, rng: &mut R) -> Vec<ProductRecord> {
        (0..self.product_count)
            .map(|i| {
                // 價格 10.00 ~ 509.99，以分為單位避免浮點誤差
                let cents: i64 = rng.gen_range(1_000..51_000);
                let stock: u32 = rng.gen_range(0..1_000);
                let zone = char::from(b'A' + (i % 4) as u8);

                ProductRecord {
                    id: format!("PROD-{:04}", i + 1),
                    name: PRODUCT_NAMES[i % PRODUCT_NAMES.len()].to_string(),
                    sku: format!("SKU-{:06}", i + 1),
                    category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                    price: Decimal::new(cents, 2),
                    stock,
                    location: format!("{}-{}-{}", zone, (i / 4) % 5 + 1, i % 3 + 1),
                    status: StockStatus::from_stock(stock, &self.thresholds),
                }
            })
            .collect()
    }

    pub fn fixture_shelves() -> Result<Vec<ShelfRecord>> {
        SHELVES
            .iter()
            .map(|(id, products, capacity)| ShelfRecord::new(id, *products, *capacity))
            .collect()
    }

    pub fn fixture_inventory() -> HashMap<String, Vec<ShelfInventoryEntry>> {
        let entry = |name: &str, quantity: u32, sku: &str| ShelfInventoryEntry {
            name: name.to_string(),
            quantity,
            sku: sku.to_string(),
        };

        HashMap::from([
            (
                "A-1-1".to_string(),
                vec![
                    entry("Industrial Widget A", 45, "SKU-001001"),
                    entry("Safety Helmet Pro", 23, "SKU-001002"),
                    entry("Cable Assembly", 12, "SKU-001003"),
                ],
            ),
            (
                "A-1-2".to_string(),
                vec![
                    entry("Mounting Hardware", 67, "SKU-001004"),
                    entry("Electronic Component", 34, "SKU-001005"),
                ],
            ),
        ])
    }

    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<InMemoryCatalog> {
        let products = self.generate_products(rng);
        tracing::info!("Generated {} mock products", products.len());
        InMemoryCatalog::new(products, Self::fixture_shelves()?, Self::fixture_inventory())
    }

    /// 以固定 seed 建立，可重現
    pub fn build_seeded(&self, seed: u64) -> Result<InMemoryCatalog> {
        tracing::debug!("Seeding mock catalog with {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        self.build(&mut rng)
    }
}

/// Recent warehouse movements, timestamped relative to `now`.
pub fn recent_activity(now: DateTime<Utc>) -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: ActivityAction::Added,
            product: "Industrial Widget A".to_string(),
            shelf: "A-1-2".to_string(),
            quantity: 50,
            user: "Mike Johnson".to_string(),
            at: now - Duration::hours(2),
        },
        ActivityEntry {
            action: ActivityAction::Removed,
            product: "Safety Helmet".to_string(),
            shelf: "B-3-1".to_string(),
            quantity: 12,
            user: "Sarah Wilson".to_string(),
            at: now - Duration::hours(4),
        },
        ActivityEntry {
            action: ActivityAction::Added,
            product: "Cable Assembly".to_string(),
            shelf: "C-2-4".to_string(),
            quantity: 25,
            user: "David Chen".to_string(),
            at: now - Duration::hours(6),
        },
    ]
}
