use crate::domain::model::{ProductRecord, ShelfRecord, StockStatus};

/// Fields a record exposes to free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for ProductRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str(), self.category.as_str()]
    }
}

impl Searchable for ShelfRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id()]
    }
}

/// Case-insensitive substring filter that keeps input order.
///
/// An empty term returns every record.
pub fn filter<T: Searchable + Clone>(records: &[T], term: &str) -> Vec<T> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Product search with the optional category and status restrictions of the
/// product list's filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub term: String,
    pub category: Option<String>,
    pub status: Option<StockStatus>,
}

impl ProductQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: StockStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.category.is_none() && self.status.is_none()
    }

    pub fn matches(&self, product: &ProductRecord) -> bool {
        self.matches_needle(product, &self.term.to_lowercase())
    }

    pub fn apply(&self, products: &[ProductRecord]) -> Vec<ProductRecord> {
        if self.is_empty() {
            return products.to_vec();
        }
        let needle = self.term.to_lowercase();
        products
            .iter()
            .filter(|product| self.matches_needle(product, &needle))
            .cloned()
            .collect()
    }

    fn matches_needle(&self, product: &ProductRecord, needle: &str) -> bool {
        product.matches_lowercase(needle)
            && self
                .category
                .as_deref()
                .map_or(true, |category| product.category.eq_ignore_ascii_case(category))
            && self.status.map_or(true, |status| product.status == status)
    }
}
