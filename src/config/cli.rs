use crate::config::toml_config::{InventorySettings, DEFAULT_DEMO_FILE};
use crate::core::report::ReportFormat;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-inventory")]
#[command(about = "Track item quantities in a small JSON inventory file")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Inventory data file (overrides the settings file)
    #[arg(long)]
    pub data_file: Option<String>,

    /// Append logs to this file (overrides the settings file)
    #[arg(long, conflicts_with = "log_stderr")]
    pub log_file: Option<String>,

    /// Log to stderr instead of a file
    #[arg(long)]
    pub log_stderr: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add stock of an item
    Add {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Remove stock of an item; the item is dropped when none is left
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Show the quantity of one item
    Qty { item: String },
    /// List items below the low-stock threshold
    Low {
        #[arg(long)]
        threshold: Option<u64>,
    },
    /// Print every item and its quantity
    Report {
        #[arg(long, default_value = "text")]
        format: ReportFormat,
    },
    /// Run a sample session. It writes only its own file, never the
    /// inventory data file
    Demo {
        #[arg(long, default_value = DEFAULT_DEMO_FILE)]
        data_file: String,
    },
}

impl CliConfig {
    /// Settings file values with command line overrides applied on top.
    pub fn settings(&self) -> Result<InventorySettings> {
        let mut settings = match &self.config {
            Some(path) => InventorySettings::from_file(path)?,
            None => InventorySettings::default(),
        };

        if let Some(data_file) = &self.data_file {
            settings.inventory.data_file = data_file.clone();
        }

        if self.log_stderr {
            settings.logging.file = None;
        } else if let Some(log_file) = &self.log_file {
            settings.logging.file = Some(log_file.clone());
        }

        if self.verbose {
            settings.logging.level = "debug".to_string();
        }

        Ok(settings)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_else(|| Command::Demo {
            data_file: DEFAULT_DEMO_FILE.to_string(),
        })
    }
}
