use crate::core::ConfigProvider;
use crate::domain::model::{StockThresholds, UtilizationThresholds};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_ordered_thresholds, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub thresholds: ThresholdConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub seed: u64,
    pub product_count: usize,
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            product_count: 50,
            page_size: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub critical_stock: u32,
    pub low_stock: u32,
    pub shelf_warning: f64,
    pub shelf_critical: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        let stock = StockThresholds::default();
        let shelf = UtilizationThresholds::default();
        Self {
            critical_stock: stock.critical,
            low_stock: stock.low,
            shelf_warning: shelf.warning,
            shelf_critical: shelf.critical,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_SEED})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_positive_number("catalog.page_size", self.catalog.page_size, 1)?;

        let t = &self.thresholds;
        validate_ordered_thresholds("thresholds.critical_stock", t.critical_stock, t.low_stock)?;
        validate_range("thresholds.shelf_warning", t.shelf_warning, 0.0, 100.0)?;
        validate_range("thresholds.shelf_critical", t.shelf_critical, 0.0, 100.0)?;
        validate_ordered_thresholds("thresholds.shelf_warning", t.shelf_warning, t.shelf_critical)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn seed(&self) -> u64 {
        self.catalog.seed
    }

    fn product_count(&self) -> usize {
        self.catalog.product_count
    }

    fn page_size(&self) -> usize {
        self.catalog.page_size
    }

    fn stock_thresholds(&self) -> StockThresholds {
        StockThresholds {
            critical: self.thresholds.critical_stock,
            low: self.thresholds.low_stock,
        }
    }

    fn utilization_thresholds(&self) -> UtilizationThresholds {
        UtilizationThresholds {
            warning: self.thresholds.shelf_warning,
            critical: self.thresholds.shelf_critical,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
