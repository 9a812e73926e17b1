use crate::domain::model::{ProductRecord, StockStatus};
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "export".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: csv, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Serialize)]
struct ProductRow<'a> {
    id: &'a str,
    name: &'a str,
    sku: &'a str,
    category: &'a str,
    price: String,
    stock: u32,
    location: &'a str,
    status: StockStatus,
}

impl<'a> From<&'a ProductRecord> for ProductRow<'a> {
    fn from(product: &'a ProductRecord) -> Self {
        Self {
            id: &product.id,
            name: &product.name,
            sku: &product.sku,
            category: &product.category,
            price: product.price.to_string(),
            stock: product.stock,
            location: &product.location,
            status: product.status,
        }
    }
}

pub fn export_products(products: &[ProductRecord], format: ExportFormat) -> Result<String> {
    let output = match format {
        ExportFormat::Csv => to_csv(products)?,
        ExportFormat::Json => serde_json::to_string_pretty(products)?,
    };
    tracing::debug!("Exported {} products as {}", products.len(), format);
    Ok(output)
}

fn to_csv(products: &[ProductRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if products.is_empty() {
        // serialize 只在第一筆資料時寫標頭
        writer.write_record([
            "id", "name", "sku", "category", "price", "stock", "location", "status",
        ])?;
    }
    for product in products {
        writer.serialize(ProductRow::from(product))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CatalogError::validation(e.to_string()))
}
