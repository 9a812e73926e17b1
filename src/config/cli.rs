use crate::config::toml_config::TomlConfig;
use crate::core::export::ExportFormat;
use crate::domain::model::StockStatus;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "warehouse-catalog")]
#[command(about = "Browse the warehouse product and shelf catalog")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the mock data seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the number of products per page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search and page through products
    Products {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(long)]
        category: Option<String>,

        /// in-stock, low-stock or out-of-stock
        #[arg(long)]
        status: Option<StockStatus>,

        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Print the page as csv or json instead of a table
        #[arg(long)]
        export: Option<ExportFormat>,
    },
    /// List shelves, optionally filtered by label
    Shelves {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show the inventory stored on one shelf
    Shelf { id: String },
    /// Find where products are stored
    Locate { term: String },
    /// Look up a shelf label as if it had been scanned
    Scan { label: String },
    /// Warehouse overview
    Dashboard,
}

impl CliConfig {
    /// 載入設定檔後套用命令列覆蓋值
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.catalog.seed = seed;
            tracing::debug!("🔧 Seed overridden to: {}", seed);
        }
        if let Some(page_size) = self.page_size {
            config.catalog.page_size = page_size;
            tracing::debug!("🔧 Page size overridden to: {}", page_size);
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.json_logs;

        if let Command::Products {
            category: Some(category),
            ..
        } = &self.command
        {
            validate_non_empty_string("category", category)?;
        }

        config.validate()?;
        Ok(config)
    }
}
