use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// `lower` 必須嚴格小於 `upper`，門檻才有意義
pub fn validate_ordered_thresholds<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    lower: T,
    upper: T,
) -> Result<()> {
    if lower >= upper {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} >= {}", lower, upper),
            reason: "Lower threshold must be below the upper threshold".to_string(),
        });
    }
    Ok(())
}

/// 確認鍵值唯一，回傳第一個重複的鍵
pub fn validate_unique<'a, K, I>(field_name: &str, keys: I) -> Result<()>
where
    K: Eq + Hash + std::fmt::Display + ?Sized + 'a,
    I: IntoIterator<Item = &'a K>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateId {
                field: field_name.to_string(),
                value: key.to_string(),
            });
        }
    }
    Ok(())
}
