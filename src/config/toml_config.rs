use crate::core::inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{InventoryError, Result};
use crate::utils::logger::{LogFormat, LOG_LEVELS};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "inventory.json";
pub const DEFAULT_LOG_FILE: &str = "inventory.log";
pub const DEFAULT_DEMO_FILE: &str = "demo_inventory.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InventorySettings {
    pub inventory: InventoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub data_file: String,
    pub low_stock_threshold: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log destination. `None` logs to stderr.
    pub file: Option<String>,
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: Some(DEFAULT_LOG_FILE.to_string()),
            level: "info".to_string(),
            format: LogFormat::Line,
        }
    }
}

impl InventorySettings {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InventoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InventoryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("inventory.data_file", &self.inventory.data_file)?;

        if let Some(file) = &self.logging.file {
            validate_path("logging.file", file)?;
        }

        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;

        Ok(())
    }
}

impl ConfigProvider for InventorySettings {
    fn data_file(&self) -> &str {
        &self.inventory.data_file
    }

    fn low_stock_threshold(&self) -> u64 {
        self.inventory.low_stock_threshold
    }

    fn log_file(&self) -> Option<&str> {
        self.logging.file.as_deref()
    }

    fn log_level(&self) -> &str {
        &self.logging.level
    }

    fn log_format(&self) -> LogFormat {
        self.logging.format
    }
}

impl Validate for InventorySettings {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
