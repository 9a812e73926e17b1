pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::TomlConfig;
pub use crate::core::{CatalogService, CatalogStore, InMemoryCatalog, MockCatalogGenerator};
pub use utils::error::{CatalogError, Result};
