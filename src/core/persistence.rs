//! Load and save that never fail outward.
//!
//! Every failure is logged at the level it deserves and turned into the
//! best-effort result: an empty stock on load, `false` on save.

use crate::adapters::JsonFileStore;
use crate::domain::model::Stock;
use crate::domain::ports::StockStore;
use crate::utils::error::InventoryError;
use std::path::Path;

pub fn save(stock: &Stock, path: impl AsRef<Path>) -> bool {
    save_to(&JsonFileStore::new(path.as_ref()), stock)
}

pub fn load(path: impl AsRef<Path>) -> Stock {
    load_from(&JsonFileStore::new(path.as_ref()))
}

pub fn save_to<S: StockStore>(store: &S, stock: &Stock) -> bool {
    match store.save(stock) {
        Ok(()) => {
            tracing::info!("Data saved successfully to {}", store.location());
            true
        }
        Err(e) => {
            tracing::error!("Error saving data: {}", e);
            false
        }
    }
}

pub fn load_from<S: StockStore>(store: &S) -> Stock {
    match store.load() {
        Ok(stock) => {
            tracing::info!("Data loaded successfully from {}", store.location());
            stock
        }
        Err(InventoryError::DataFileMissing { path }) => {
            tracing::error!("File not found: {}", path);
            Stock::new()
        }
        Err(InventoryError::EmptyDataFile { path }) => {
            tracing::warn!("No data found in {}", path);
            Stock::new()
        }
        Err(e @ InventoryError::ParseError { .. }) => {
            tracing::error!("{}", e);
            Stock::new()
        }
        Err(e) => {
            tracing::error!("Error loading data from {}: {}", store.location(), e);
            Stock::new()
        }
    }
}
