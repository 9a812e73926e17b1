use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use std::io::{self, Write};
use warehouse_catalog::core::export::export_products;
use warehouse_catalog::core::generator::recent_activity;
use warehouse_catalog::core::pager::Page;
use warehouse_catalog::core::query::ProductQuery;
use warehouse_catalog::core::{ConfigProvider, ProductRecord};
use warehouse_catalog::domain::model::{ShelfId, StockLevel, UtilizationLevel};
use warehouse_catalog::utils::error::ErrorSeverity;
use warehouse_catalog::utils::logger;
use warehouse_catalog::{
    CatalogError, CatalogService, CatalogStore, CliConfig, Command, InMemoryCatalog,
    MockCatalogGenerator, Result,
};

fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = execute(&cli) {
        match e.downcast_ref::<CatalogError>() {
            Some(err) => {
                tracing::error!(
                    "❌ Command failed: {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    err.category(),
                    err.severity()
                );
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
            }
            None => {
                tracing::error!("❌ Command failed: {:#}", e);
                eprintln!("❌ {:#}", e);
            }
        }

        let code = e.downcast_ref::<CatalogError>().map_or(1, exit_code);
        if code > 0 {
            std::process::exit(code);
        }
    }
}

fn execute(cli: &CliConfig) -> anyhow::Result<()> {
    let config = cli
        .resolve()
        .context("Failed to resolve configuration")?;

    if config.logging.json {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("Resolved config: {:?}", config);

    let catalog = MockCatalogGenerator::from_config(&config)
        .build_seeded(config.seed())
        .with_context(|| format!("Failed to build mock catalog with seed {}", config.seed()))?;
    let service = CatalogService::from_config(catalog, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&service, &cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

fn exit_code(error: &CatalogError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,   // 查無資料
        ErrorSeverity::High => 1,     // 輸入錯誤
        ErrorSeverity::Critical => 3, // 設定或系統錯誤
    }
}

fn run<W: Write>(
    service: &CatalogService<InMemoryCatalog>,
    command: &Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Products {
            search,
            category,
            status,
            page,
            export,
        } => {
            let mut query = ProductQuery::new(search.as_str());
            if let Some(category) = category {
                query = query.with_category(category.as_str());
            }
            if let Some(status) = status {
                query = query.with_status(*status);
            }

            let page = service.search_products(&query, *page)?;
            match export {
                Some(format) => write!(out, "{}", export_products(&page.items, *format)?)?,
                None => print_products(service, &page, out)?,
            }
        }
        Command::Shelves { search } => {
            let thresholds = service.utilization_thresholds();
            let shelves = service.search_shelves(search);
            writeln!(out, "Shelves ({})", shelves.len())?;
            for shelf in shelves {
                let marker = match shelf.utilization_level(thresholds) {
                    UtilizationLevel::Critical => "FULL",
                    UtilizationLevel::Warning => "BUSY",
                    UtilizationLevel::Normal => "OK",
                };
                writeln!(
                    out,
                    "  {:<8} {:>3}% {} {:>3}/{:<3} {}",
                    shelf.id(),
                    shelf.utilization_rounded(),
                    bar(shelf.utilization_percent()),
                    shelf.product_count(),
                    shelf.capacity(),
                    marker
                )?;
            }
        }
        Command::Shelf { id } => {
            match service.store().find_shelf(id) {
                Some(shelf) => writeln!(
                    out,
                    "Shelf {} - {}/{} products ({}% full)",
                    shelf.id(),
                    shelf.product_count(),
                    shelf.capacity(),
                    shelf.utilization_rounded()
                )?,
                None => writeln!(
                    out,
                    "Shelf {} - not a known location",
                    ShelfId::normalize(id).unwrap_or_else(|| id.trim().to_string())
                )?,
            }
            let entries = service.shelf_inventory(id);
            if entries.is_empty() {
                writeln!(out, "  (no inventory recorded)")?;
            }
            for entry in entries {
                writeln!(
                    out,
                    "  {:<12} {:<28} {:>5} units",
                    entry.sku, entry.name, entry.quantity
                )?;
            }
        }
        Command::Locate { term } => {
            let hits = service.locate(term);
            if term.trim().is_empty() {
                writeln!(out, "Enter a product name or SKU to see its warehouse locations")?;
            } else if hits.is_empty() {
                writeln!(out, "No products match '{}'", term)?;
            }
            for hit in hits {
                writeln!(
                    out,
                    "  {:<8} {:<12} {:<24} {:>4} ({})",
                    hit.location, hit.sku, hit.name, hit.stock, hit.status
                )?;
            }
        }
        Command::Scan { label } => {
            let detail = service.scan(label)?;
            writeln!(
                out,
                "Shelf {} - {} - {} products",
                detail.shelf.id(),
                detail.zone,
                detail.entries.len()
            )?;
            writeln!(
                out,
                "  Capacity {} {}/{} slots ({}%)",
                bar(detail.shelf.utilization_percent()),
                detail.shelf.product_count(),
                detail.shelf.capacity(),
                detail.shelf.utilization_rounded()
            )?;
            for entry in &detail.entries {
                writeln!(
                    out,
                    "  {:<12} {:<28} {:>5} units",
                    entry.sku, entry.name, entry.quantity
                )?;
            }
        }
        Command::Dashboard => {
            let now = Utc::now();
            let summary = service.dashboard(recent_activity(now));
            writeln!(out, "Total Products     {}", summary.total_products)?;
            writeln!(out, "Active Locations   {}", summary.active_locations)?;
            writeln!(out, "Low Stock Items    {}", summary.low_stock_items)?;
            writeln!(out, "Units On Hand      {}", summary.total_units)?;
            writeln!(out, "Inventory Value    ${}", summary.inventory_value.round_dp(2))?;
            writeln!(out, "Shelves Near Full  {}", summary.shelves_near_capacity)?;
            writeln!(out)?;
            writeln!(out, "Recent Activity")?;
            for activity in &summary.recent_activity {
                writeln!(
                    out,
                    "  {} {} x{} - Shelf {} by {} ({})",
                    activity.action,
                    activity.product,
                    activity.quantity,
                    activity.shelf,
                    activity.user,
                    activity.relative_age(now)
                )?;
            }
        }
    }

    Ok(())
}

fn print_products<W: Write>(
    service: &CatalogService<InMemoryCatalog>,
    page: &Page<ProductRecord>,
    out: &mut W,
) -> Result<()> {
    let thresholds = service.stock_thresholds();
    writeln!(out, "Products ({})  {}", page.total_items, page.range_label())?;
    for product in &page.items {
        let flag = match product.stock_level(thresholds) {
            StockLevel::Critical => "!!",
            StockLevel::Warning => "!",
            StockLevel::Healthy => "",
        };
        writeln!(
            out,
            "  {:<10} {:<22} {:<11} {:<12} {:>8} {:>4}{:<2} {:<6} {}",
            product.id,
            product.name,
            product.sku,
            product.category,
            format!("${}", product.price),
            product.stock,
            flag,
            product.location,
            product.status
        )?;
    }
    if page.total_pages > 1 {
        writeln!(
            out,
            "Page {} of {}{}{}",
            page.page,
            page.total_pages,
            if page.has_previous() { "  [prev]" } else { "" },
            if page.has_next() { "  [next]" } else { "" }
        )?;
    }
    Ok(())
}

/// 20 格的使用率長條
fn bar(percent: f64) -> String {
    let filled = ((percent / 5.0).round() as usize).min(20);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_catalog::TomlConfig;

    fn service() -> CatalogService<InMemoryCatalog> {
        let config = TomlConfig::default();
        let catalog = MockCatalogGenerator::from_config(&config)
            .build_seeded(config.seed())
            .unwrap();
        CatalogService::from_config(catalog, &config)
    }

    fn render(command: Command) -> Result<String> {
        let mut out = Vec::new();
        run(&service(), &command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn products_page(page: usize) -> Command {
        Command::Products {
            search: String::new(),
            category: None,
            status: None,
            page,
            export: None,
        }
    }

    #[test]
    fn test_exit_code_per_category() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let json = serde_json::from_str::<u32>("not json").unwrap_err();
        let cases = vec![
            (CatalogError::not_found("shelf", "Z-9-9"), 2),
            (CatalogError::OutOfRange { page: 99, total_pages: 1 }, 1),
            (CatalogError::validation("page size must be at least 1"), 1),
            (
                CatalogError::DuplicateId {
                    field: "sku".to_string(),
                    value: "SKU-000001".to_string(),
                },
                3,
            ),
            (
                CatalogError::ConfigValidationError {
                    field: "page_size".to_string(),
                    message: "must be at least 1".to_string(),
                },
                3,
            ),
            (
                CatalogError::InvalidConfigValueError {
                    field: "category".to_string(),
                    value: " ".to_string(),
                    reason: "empty".to_string(),
                },
                3,
            ),
            (CatalogError::IoError(io), 3),
            (CatalogError::SerializationError(json), 3),
        ];

        for (error, expected) in cases {
            assert_eq!(exit_code(&error), expected, "{:?}", error);
        }
    }

    #[test]
    fn test_shelf_command_lists_inventory() {
        let output = render(Command::Shelf {
            id: " a-01-1 ".to_string(),
        })
        .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Shelf A-1-1 - 12/15 products (80% full)");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("SKU-001001"));
    }

    #[test]
    fn test_shelf_command_for_unknown_shelf() {
        let output = render(Command::Shelf {
            id: "z-9-9".to_string(),
        })
        .unwrap();
        assert_eq!(
            output,
            "Shelf Z-9-9 - not a known location\n  (no inventory recorded)\n"
        );
    }

    #[test]
    fn test_scan_unknown_shelf_exits_not_found() {
        let err = render(Command::Scan {
            label: "Z-9-9".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_products_page_out_of_range_exits_one() {
        let err = render(products_page(99)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::OutOfRange { page: 99, total_pages: 1 }
        ));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_products_first_page() {
        let output = render(products_page(1)).unwrap();
        assert!(output.starts_with("Products (50)  Showing 1-50 of 50"));
        assert_eq!(output.lines().count(), 51);
    }

    #[test]
    fn test_context_keeps_exit_code() {
        let err = anyhow::Error::new(CatalogError::not_found("shelf", "Z-9-9"))
            .context("Failed to scan shelf");
        let code = err.downcast_ref::<CatalogError>().map_or(1, exit_code);
        assert_eq!(code, 2);
    }
}
