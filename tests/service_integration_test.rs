use anyhow::Result;
use chrono::Utc;
use std::io::Write;
use tempfile::NamedTempFile;
use warehouse_catalog::core::export::{export_products, ExportFormat};
use warehouse_catalog::core::generator::recent_activity;
use warehouse_catalog::core::query::ProductQuery;
use warehouse_catalog::core::{CatalogStore, ConfigProvider, StockStatus};
use warehouse_catalog::utils::validation::Validate;
use warehouse_catalog::{CatalogError, CatalogService, MockCatalogGenerator, TomlConfig};

fn service_from(config: &TomlConfig) -> Result<CatalogService<warehouse_catalog::InMemoryCatalog>> {
    let catalog = MockCatalogGenerator::from_config(config).build_seeded(config.seed())?;
    Ok(CatalogService::from_config(catalog, config))
}

#[test]
fn test_config_file_drives_catalog() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[catalog]
seed = 11
product_count = 80
page_size = 20

[thresholds]
critical_stock = 100
low_stock = 400
"#,
    )?;

    let config = TomlConfig::from_file(temp_file.path())?;
    config.validate()?;
    let service = service_from(&config)?;

    let products = service.store().all_products();
    assert_eq!(products.len(), 80);
    for product in products.iter() {
        let expected = if product.stock == 0 {
            StockStatus::OutOfStock
        } else if product.stock < 400 {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        };
        assert_eq!(product.status, expected, "{}", product.id);
    }

    let page = service.search_products(&ProductQuery::default(), 4)?;
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.items[0].id, "PROD-0061");
    Ok(())
}

#[test]
fn test_same_seed_gives_same_results() -> Result<()> {
    let config = TomlConfig::default();
    let first = service_from(&config)?;
    let second = service_from(&config)?;

    let query = ProductQuery::new("assembly");
    assert_eq!(
        first.search_products(&query, 1)?,
        second.search_products(&query, 1)?
    );
    Ok(())
}

#[test]
fn test_dashboard_agrees_with_store() -> Result<()> {
    let service = service_from(&TomlConfig::default())?;
    let now = Utc::now();
    let summary = service.dashboard(recent_activity(now));

    let products = service.store().all_products();
    let low_stock = products
        .iter()
        .filter(|p| p.status != StockStatus::InStock)
        .count();
    let units: u64 = products.iter().map(|p| u64::from(p.stock)).sum();

    assert_eq!(summary.total_products, 50);
    assert_eq!(summary.active_locations, 5);
    assert_eq!(summary.low_stock_items, low_stock);
    assert_eq!(summary.total_units, units);
    // A-2-1 (100%) and B-2-2 (90%)
    assert_eq!(summary.shelves_near_capacity, 2);
    assert_eq!(summary.recent_activity.len(), 3);
    assert_eq!(summary.recent_activity[1].relative_age(now), "4 hours ago");
    Ok(())
}

#[test]
fn test_scan_and_shelf_lookup() -> Result<()> {
    let service = service_from(&TomlConfig::default())?;

    let detail = service.scan(" a-1-2 ")?;
    assert_eq!(detail.shelf.id(), "A-1-2");
    assert_eq!(detail.zone, "Zone A");
    assert_eq!(detail.entries[0].name, "Mounting Hardware");

    assert!(matches!(
        service.scan("Z-9-9"),
        Err(CatalogError::NotFound { .. })
    ));
    // 一般查詢未知貨架只回傳空清單
    assert!(service.shelf_inventory("Z-9-9").is_empty());
    Ok(())
}

#[test]
fn test_locate_products() -> Result<()> {
    let service = service_from(&TomlConfig::default())?;

    let hits = service.locate("SKU-000006");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Electronic Component");
    // i = 5 -> B-2-3
    assert_eq!(hits[0].location, "B-2-3");

    assert!(service.locate("").is_empty());
    Ok(())
}

#[test]
fn test_export_current_page() -> Result<()> {
    let config = TomlConfig::from_toml_str("[catalog]\npage_size = 5\n")?;
    let service = service_from(&config)?;

    let page = service.search_products(&ProductQuery::new("helmet"), 1)?;
    let csv = export_products(&page.items, ExportFormat::Csv)?;
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "id,name,sku,category,price,stock,location,status");
    assert_eq!(lines.len(), page.items.len() + 1);
    assert!(lines[1..].iter().all(|line| line.contains("Safety Helmet Pro")));

    let json = export_products(&page.items, ExportFormat::Json)?;
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(parsed.as_array().map(Vec::len), Some(page.items.len()));
    Ok(())
}
