use crate::adapters::JsonFileStore;
use crate::config::Command;
use crate::core::inventory::Inventory;
use crate::core::persistence;
use crate::core::report::{write_report, ReportFormat};
use crate::domain::model::{Removal, Stock};
use crate::domain::ports::{ConfigProvider, StockStore};
use crate::utils::error::{InventoryError, Result};
use std::io::Write;

/// Loads the stock a mutating command will write back. Only a missing or
/// blank file starts empty; anything unreadable stops the command so the
/// file is never saved over.
fn load_for_update<S: StockStore>(store: &S) -> Result<Stock> {
    match store.load() {
        Ok(stock) => Ok(stock),
        Err(InventoryError::DataFileMissing { path })
        | Err(InventoryError::EmptyDataFile { path }) => {
            tracing::info!("Starting a new inventory in {}", path);
            Ok(Stock::new())
        }
        Err(e) => Err(e),
    }
}

/// Runs one CLI command against the configured data file, writing
/// user-facing output to `out`.
pub fn run<C: ConfigProvider, W: Write>(command: &Command, config: &C, out: &mut W) -> Result<()> {
    match command {
        Command::Add { item, qty } => {
            let store = JsonFileStore::new(config.data_file());
            let mut inventory = Inventory::from_stock(load_for_update(&store)?);
            inventory.add_raw(item, qty)?;
            store.save(inventory.stock())?;
            writeln!(out, "{} -> {}", item, inventory.quantity(item))?;
        }
        Command::Remove { item, qty } => {
            let store = JsonFileStore::new(config.data_file());
            let mut inventory = Inventory::from_stock(load_for_update(&store)?);
            match inventory.remove_raw(item, qty)? {
                Removal::Missing => {
                    return Err(InventoryError::MissingItem { item: item.clone() });
                }
                Removal::Deleted => {
                    store.save(inventory.stock())?;
                    writeln!(out, "Removed '{}' from inventory.", item)?;
                }
                Removal::Decremented { remaining } => {
                    store.save(inventory.stock())?;
                    writeln!(out, "{} -> {}", item, remaining)?;
                }
            }
        }
        Command::Qty { item } => {
            let inventory = Inventory::from_stock(persistence::load(config.data_file()));
            writeln!(out, "{}: {}", item, inventory.quantity(item))?;
        }
        Command::Low { threshold } => {
            let inventory = Inventory::from_stock(persistence::load(config.data_file()));
            let threshold = threshold.unwrap_or_else(|| config.low_stock_threshold());
            writeln!(out, "Low items: {:?}", inventory.low_stock_items(threshold))?;
        }
        Command::Report { format } => {
            let stock = persistence::load(config.data_file());
            write_report(out, &stock, *format)?;
        }
        Command::Demo { data_file } => demo(config, data_file, out)?,
    }
    Ok(())
}

/// A short scripted session: a few adds and removes, a save to `data_file`
/// and reload, and the resulting report. The configured data file is not
/// touched.
pub fn demo<C: ConfigProvider, W: Write>(config: &C, data_file: &str, out: &mut W) -> Result<()> {
    let mut inventory = Inventory::new();
    inventory.add("apple", 10);
    inventory.add("banana", 2);
    inventory.add("orange", 0);
    inventory.remove("apple", 3);
    inventory.remove("orange", 1);

    writeln!(out, "Apple stock: {}", inventory.quantity("apple"))?;
    writeln!(
        out,
        "Low items: {:?}",
        inventory.low_stock_items(config.low_stock_threshold())
    )?;

    persistence::save(inventory.stock(), data_file);
    let reloaded = persistence::load(data_file);
    write_report(out, &reloaded, ReportFormat::Text)?;

    tracing::debug!("Session journal has {} entries", inventory.journal().len());
    for entry in inventory.journal() {
        tracing::debug!("journal: {}", entry);
    }
    Ok(())
}
