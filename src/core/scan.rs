use crate::core::CatalogStore;
use crate::domain::model::{ShelfId, ShelfInventoryEntry, ShelfRecord};
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelfDetail {
    pub shelf: ShelfRecord,
    pub zone: String,
    pub entries: Vec<ShelfInventoryEntry>,
}

/// Resolves a manually entered shelf label.
///
/// Unlike a plain inventory lookup, an unknown shelf is an error here: the
/// operator asked for one specific location.
pub fn scan<S: CatalogStore + ?Sized>(store: &S, manual_entry: &str) -> Result<ShelfDetail> {
    let label = manual_entry.trim();
    if label.is_empty() {
        return Err(CatalogError::validation("shelf label cannot be empty"));
    }

    let shelf_id: ShelfId = label.parse()?;
    let key = shelf_id.to_string();
    let shelf = store
        .find_shelf(&key)
        .ok_or_else(|| CatalogError::not_found("shelf", key.as_str()))?;

    tracing::debug!("Scanned shelf {}", key);

    Ok(ShelfDetail {
        zone: shelf_id.zone_label(),
        entries: store.shelf_inventory(&key).into_owned(),
        shelf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockCatalogGenerator;
    use crate::domain::model::StockThresholds;

    fn catalog() -> crate::core::InMemoryCatalog {
        MockCatalogGenerator::new(8, StockThresholds::default())
            .build_seeded(1)
            .unwrap()
    }

    #[test]
    fn test_scan_normalizes_label() {
        let detail = scan(&catalog(), "  a-1-2 ").unwrap();
        assert_eq!(detail.shelf.id(), "A-1-2");
        assert_eq!(detail.zone, "Zone A");
        assert_eq!(detail.entries.len(), 2);
    }

    #[test]
    fn test_scan_known_shelf_without_inventory() {
        let detail = scan(&catalog(), "B-1-1").unwrap();
        assert!(detail.entries.is_empty());
        assert_eq!(detail.shelf.utilization_rounded(), 30);
    }

    #[test]
    fn test_scan_errors() {
        let catalog = catalog();
        assert!(matches!(
            scan(&catalog, ""),
            Err(CatalogError::ValidationError { .. })
        ));
        assert!(matches!(
            scan(&catalog, "shelf 12"),
            Err(CatalogError::ValidationError { .. })
        ));
        assert!(matches!(
            scan(&catalog, "Z-9-9"),
            Err(CatalogError::NotFound { .. })
        ));
    }
}
