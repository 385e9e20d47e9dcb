use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Item not found: {item}")]
    MissingItem { item: String },

    #[error("File not found: {path}")]
    DataFileMissing { path: String },

    #[error("No data found in {path}")]
    EmptyDataFile { path: String },

    #[error("Error parsing data in {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Parse,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InventoryError {
    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::MissingItem { .. } => ErrorCategory::Lookup,
            Self::ParseError { .. } | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Parse
            }
            Self::DataFileMissing { .. } | Self::EmptyDataFile { .. } | Self::IoError(_) => {
                ErrorCategory::Io
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingItem { .. } | Self::EmptyDataFile { .. } => ErrorSeverity::Low,
            Self::InvalidInput { .. } | Self::DataFileMissing { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. }
            | Self::SerializationError(_)
            | Self::CsvError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI. `Low` counts as success.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { field, value, .. } => {
                format!("'{}' is not a valid {}", value, field)
            }
            Self::MissingItem { item } => format!("'{}' is not in stock", item),
            Self::DataFileMissing { path } => format!("Inventory file '{}' does not exist", path),
            Self::EmptyDataFile { path } => format!("Inventory file '{}' is empty", path),
            Self::ParseError { path, .. } => {
                format!("Inventory file '{}' could not be read as JSON", path)
            }
            Self::IoError(e) => format!("File system error: {}", e),
            Self::CsvError(e) => format!("Could not write CSV report: {}", e),
            Self::SerializationError(e) => format!("Could not serialize inventory: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Quantities must be whole non-negative numbers and item names must not be blank",
            ErrorCategory::Lookup => "Run the 'report' command to list items currently in stock",
            ErrorCategory::Parse => "Fix or delete the inventory file; it must be a JSON object of item -> quantity",
            ErrorCategory::Io => "Check that the path exists and that you have permission to read and write it",
            ErrorCategory::Config => "Check the TOML configuration file and command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
