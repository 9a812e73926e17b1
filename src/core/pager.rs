use crate::utils::error::{CatalogError, Result};
use serde::Serialize;

/// One page of a result set, 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// 1-based position of the first item, 0 when the page is empty.
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_position(&self) -> usize {
        (self.page - 1) * self.page_size + self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Showing 1-50 of 120"
    pub fn range_label(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.first_position(),
            self.last_position(),
            self.total_items
        )
    }
}

/// 計算總頁數，空集合仍算一頁
pub fn total_pages(total_items: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(CatalogError::validation("page size must be at least 1"));
    }
    Ok(total_items.div_ceil(page_size).max(1))
}

/// Slices `records` into the requested page.
///
/// Pages outside `1..=total_pages` fail with `OutOfRange` rather than being
/// clamped.
pub fn paginate<T: Clone>(records: &[T], page_size: usize, page: usize) -> Result<Page<T>> {
    let total_pages = total_pages(records.len(), page_size)?;
    if page == 0 || page > total_pages {
        return Err(CatalogError::OutOfRange { page, total_pages });
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(records.len());
    let items = records.get(start..end).unwrap_or_default().to_vec();

    tracing::debug!(
        "Paginated {} records into page {}/{} ({} items)",
        records.len(),
        page,
        total_pages,
        items.len()
    );

    Ok(Page {
        items,
        page,
        page_size,
        total_pages,
        total_items: records.len(),
    })
}
