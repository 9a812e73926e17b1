use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    #[error("Page {page} is out of range (1..={total_pages})")]
    OutOfRange { page: usize, total_pages: usize },

    #[error("Duplicate {field}: {value}")]
    DuplicateId { field: String, value: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn not_found(kind: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::Lookup,
            Self::OutOfRange { .. } | Self::ValidationError { .. } => ErrorCategory::Input,
            Self::DuplicateId { .. } => ErrorCategory::Data,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Data | ErrorCategory::Configuration | ErrorCategory::System => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 依錯誤類型提供修復建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::NotFound { kind, .. } => {
                format!("Check the {} identifier, e.g. `shelves` lists known shelves", kind)
            }
            Self::OutOfRange { total_pages, .. } => {
                format!("Request a page between 1 and {}", total_pages)
            }
            Self::ValidationError { .. } => "Correct the input and try again".to_string(),
            Self::DuplicateId { field, .. } => {
                format!("Every record must carry a unique {}", field)
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the configuration file or command line", field)
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Retry the export in another format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { kind, id } => format!("No {} named '{}'", kind, id),
            Self::OutOfRange { page, total_pages } => {
                format!("Page {} does not exist, there are {} page(s)", page, total_pages)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
