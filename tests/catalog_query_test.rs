use anyhow::Result;
use warehouse_catalog::core::query::{filter, ProductQuery, Searchable};
use warehouse_catalog::core::{CatalogStore, StockThresholds};
use warehouse_catalog::core::scan::scan;
use warehouse_catalog::MockCatalogGenerator;

fn catalog() -> Result<warehouse_catalog::InMemoryCatalog> {
    Ok(MockCatalogGenerator::new(50, StockThresholds::default()).build_seeded(2024)?)
}

/// 空字串等同不篩選
#[test]
fn test_empty_term_returns_all_records() -> Result<()> {
    let catalog = catalog()?;
    let products = catalog.all_products();
    let shelves = catalog.all_shelves();

    assert_eq!(filter(&products, ""), products.to_vec());
    assert_eq!(filter(&shelves, ""), shelves.to_vec());
    Ok(())
}

#[test]
fn test_filter_partitions_records() -> Result<()> {
    let catalog = catalog()?;
    let products = catalog.all_products();

    for term in ["widget", "SKU-00001", "safety", "TOOL", "e", "no-such-thing"] {
        let needle = term.to_lowercase();
        let matched = filter(&products, term);

        for product in &matched {
            let hit = [&product.name, &product.sku, &product.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            assert!(hit, "{} should not match '{}'", product.id, term);
        }

        let rejected: Vec<_> = products
            .iter()
            .filter(|product| !matched.contains(product))
            .collect();
        for product in rejected {
            assert!(!product.matches_lowercase(&needle));
        }

        assert_eq!(filter(&matched, term), matched, "filter must be idempotent");
    }
    Ok(())
}

#[test]
fn test_sku_search_keeps_catalog_order() -> Result<()> {
    let catalog = catalog()?;
    let products = catalog.all_products();

    // SKU-000010 .. SKU-000019
    let matched = filter(&products, "sku-00001");
    let ids: Vec<&str> = matched.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(ids.first(), Some(&"PROD-0010"));
    assert_eq!(ids.last(), Some(&"PROD-0019"));
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[test]
fn test_shelf_search_by_partial_label() -> Result<()> {
    let catalog = catalog()?;
    let shelves = catalog.all_shelves();

    let matched = filter(&shelves, "a-2");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id(), "A-2-1");
    assert_eq!(matched[0].utilization_rounded(), 100);

    let zone_b: Vec<String> = filter(&shelves, "B-")
        .iter()
        .map(|shelf| shelf.id().to_string())
        .collect();
    assert_eq!(zone_b, vec!["B-1-1", "B-2-2"]);
    Ok(())
}

#[test]
fn test_unknown_shelf_inventory_is_empty() -> Result<()> {
    let catalog = catalog()?;
    assert!(catalog.shelf_inventory("Z-9-9").is_empty());
    assert_eq!(catalog.shelf_inventory("A-1-1").len(), 3);
    Ok(())
}

/// 同一個貨架不論怎麼輸入，三種查詢結果都要一致
#[test]
fn test_shelf_lookups_agree_on_spelling_variants() -> Result<()> {
    let catalog = catalog()?;

    for label in ["A-1-1", "a-1-1", " a-1-1 ", "A-01-1", "a-01-01"] {
        let shelf = catalog.find_shelf(label);
        assert_eq!(shelf.as_ref().map(|s| s.id()), Some("A-1-1"), "label {:?}", label);
        assert_eq!(catalog.shelf_inventory(label).len(), 3, "label {:?}", label);
        assert_eq!(scan(&catalog, label)?.entries.len(), 3, "label {:?}", label);
    }
    Ok(())
}

#[test]
fn test_unparsable_shelf_label_names_no_shelf() -> Result<()> {
    let catalog = catalog()?;

    for label in ["A11", "A-1", "A-0-1", "A-1-1-1", "--"] {
        assert!(catalog.find_shelf(label).is_none(), "label {:?}", label);
        assert!(catalog.shelf_inventory(label).is_empty(), "label {:?}", label);
        assert!(scan(&catalog, label).is_err(), "label {:?}", label);
    }
    Ok(())
}

#[test]
fn test_category_filter_on_generated_catalog() -> Result<()> {
    let catalog = catalog()?;
    let products = catalog.all_products();

    let tools = ProductQuery::default().with_category("tools").apply(&products);
    // 分類依序循環，50 筆中 Tools 佔 12 筆
    assert_eq!(tools.len(), 12);
    assert!(tools.iter().all(|p| p.category == "Tools"));
    Ok(())
}
