pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::JsonFileStore;
pub use config::InventorySettings;
pub use core::inventory::Inventory;
pub use domain::model::{LogEntry, Removal, Stock};
pub use utils::error::{InventoryError, Result};
