use crate::domain::model::{LogEntry, Removal, Stock};
use crate::utils::error::Result;
use crate::utils::validation::{parse_quantity, validate_item_name};

pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Adds `qty` of `item`, creating the entry if needed, and returns the
/// journal entry describing the change.
pub fn add(stock: &mut Stock, item: &str, qty: u64) -> LogEntry {
    let total = stock.increase(item, qty);
    let entry = LogEntry::now(format!("Added {} of {}", qty, item));
    tracing::info!("{}", entry);
    if total == u64::MAX {
        tracing::warn!("Quantity of {} saturated at {}", item, total);
    }
    entry
}

/// Removes `qty` of `item`. Missing items are a logged no-op.
pub fn remove(stock: &mut Stock, item: &str, qty: u64) -> Removal {
    let removal = stock.decrease(item, qty);
    match removal {
        Removal::Deleted => tracing::info!("Removed '{}' from inventory.", item),
        Removal::Decremented { remaining } => {
            tracing::debug!("Removed {} of {}, {} left", qty, item, remaining)
        }
        Removal::Missing => tracing::warn!("Tried to remove non-existent item: {}", item),
    }
    removal
}

pub fn quantity(stock: &Stock, item: &str) -> u64 {
    stock.get(item).unwrap_or(0)
}

/// Items whose quantity is strictly below `threshold`, in stock order.
pub fn low_stock_items(stock: &Stock, threshold: u64) -> Vec<String> {
    let low: Vec<String> = stock
        .iter()
        .filter(|(_, qty)| *qty < threshold)
        .map(|(item, _)| item.to_string())
        .collect();
    if !low.is_empty() {
        tracing::info!("Low stock items found: {:?}", low);
    }
    low
}

/// A stock plus the journal of everything done to it this session.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    stock: Stock,
    journal: Vec<LogEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stock(stock: Stock) -> Self {
        Self {
            stock,
            journal: Vec::new(),
        }
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn into_stock(self) -> Stock {
        self.stock
    }

    pub fn journal(&self) -> &[LogEntry] {
        &self.journal
    }

    pub fn add(&mut self, item: &str, qty: u64) {
        let entry = add(&mut self.stock, item, qty);
        self.journal.push(entry);
    }

    /// Like [`Inventory::add`] for untyped input. Bad input is logged and
    /// handed back; the stock is left untouched.
    pub fn add_raw(&mut self, item: &str, raw_qty: &str) -> Result<()> {
        let qty = validate_item_name(item)
            .and_then(|_| parse_quantity(raw_qty))
            .inspect_err(|e| tracing::warn!("Invalid input types: {}", e))?;
        self.add(item, qty);
        Ok(())
    }

    pub fn remove(&mut self, item: &str, qty: u64) -> Removal {
        let removal = remove(&mut self.stock, item, qty);
        if removal != Removal::Missing {
            self.journal
                .push(LogEntry::now(format!("Removed {} of {}", qty, item)));
        }
        removal
    }

    pub fn remove_raw(&mut self, item: &str, raw_qty: &str) -> Result<Removal> {
        let qty = parse_quantity(raw_qty)
            .inspect_err(|e| tracing::error!("Invalid quantity while removing {}: {}", item, e))?;
        Ok(self.remove(item, qty))
    }

    pub fn quantity(&self, item: &str) -> u64 {
        quantity(&self.stock, item)
    }

    pub fn low_stock_items(&self, threshold: u64) -> Vec<String> {
        low_stock_items(&self.stock, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::InventoryError;

    #[test]
    fn test_add_accumulates_and_journals() {
        let mut inventory = Inventory::new();
        inventory.add("apple", 10);
        inventory.add("apple", 5);

        assert_eq!(inventory.quantity("apple"), 15);
        assert_eq!(inventory.journal().len(), 2);
        assert_eq!(inventory.journal()[1].message, "Added 5 of apple");
    }

    #[test]
    fn test_add_then_remove_accumulates() {
        let mut inventory = Inventory::new();
        inventory.add("apple", 10);
        inventory.remove("apple", 3);
        inventory.add("apple", 1);
        assert_eq!(inventory.quantity("apple"), 8);

        assert_eq!(inventory.remove("apple", 8), Removal::Deleted);
        assert_eq!(inventory.quantity("apple"), 0);
        assert!(inventory.stock().is_empty());
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut inventory = Inventory::new();
        inventory.add("apple", 2);
        let before = inventory.stock().clone();
        let journal_len = inventory.journal().len();

        assert_eq!(inventory.remove("kiwi", 1), Removal::Missing);
        assert_eq!(inventory.stock(), &before);
        assert_eq!(inventory.journal().len(), journal_len);
    }

    #[test]
    fn test_add_raw_rejects_text_quantity() {
        let mut inventory = Inventory::new();
        inventory.add("apple", 2);

        let err = inventory.add_raw("apple", "ten").unwrap_err();
        assert!(matches!(err, InventoryError::InvalidInput { .. }));
        assert_eq!(inventory.quantity("apple"), 2);
        assert_eq!(inventory.journal().len(), 1);

        let err = inventory.add_raw("  ", "3").unwrap_err();
        assert!(matches!(err, InventoryError::InvalidInput { .. }));
        assert_eq!(inventory.stock().len(), 1);
    }

    #[test]
    fn test_remove_raw_rejects_text_quantity() {
        let mut inventory = Inventory::new();
        inventory.add("apple", 2);
        assert!(inventory.remove_raw("apple", "a few").is_err());
        assert_eq!(inventory.quantity("apple"), 2);
        assert_eq!(
            inventory.remove_raw("apple", "1").unwrap(),
            Removal::Decremented { remaining: 1 }
        );
    }

    #[test]
    fn test_quantity_of_unknown_item_is_zero() {
        let stock = Stock::new();
        assert_eq!(quantity(&stock, "anything"), 0);
    }

    #[test]
    fn test_low_stock_items() {
        let stock: Stock = [("apple", 10), ("banana", 2)].into_iter().collect();
        assert_eq!(
            low_stock_items(&stock, DEFAULT_LOW_STOCK_THRESHOLD),
            vec!["banana".to_string()]
        );
    }

    #[test]
    fn test_low_stock_threshold_is_strict_and_ordered() {
        let stock: Stock = [("c", 4), ("a", 5), ("b", 1)].into_iter().collect();
        assert_eq!(low_stock_items(&stock, 5), vec!["c", "b"]);
        assert!(low_stock_items(&stock, 1).is_empty());
    }

    #[test]
    fn test_adding_zero_of_new_item_keeps_invariant() {
        let mut inventory = Inventory::new();
        inventory.add("orange", 0);
        assert!(!inventory.stock().contains("orange"));
        assert_eq!(inventory.journal().len(), 1);
    }
}
