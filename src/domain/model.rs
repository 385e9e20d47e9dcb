use chrono::{DateTime, Local};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, Copy)]
struct Slot {
    seq: u64,
    qty: u64,
}

/// Item name to quantity, iterated in insertion order.
///
/// A quantity never sits at zero: any update that would leave an item at 0
/// removes the item instead. Removing an item and adding it again moves it to
/// the end of the iteration order.
#[derive(Debug, Clone, Default)]
pub struct Stock {
    slots: HashMap<String, Slot>,
    order: BTreeMap<u64, String>,
    next_seq: u64,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.slots.contains_key(item)
    }

    pub fn get(&self, item: &str) -> Option<u64> {
        self.slots.get(item).map(|slot| slot.qty)
    }

    /// Sets `item` to exactly `qty`, keeping its position if already present.
    /// A zero quantity removes the item.
    pub fn set(&mut self, item: &str, qty: u64) {
        if qty == 0 {
            self.delete(item);
            return;
        }
        match self.slots.get_mut(item) {
            Some(slot) => slot.qty = qty,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.slots.insert(item.to_string(), Slot { seq, qty });
                self.order.insert(seq, item.to_string());
            }
        }
    }

    /// Adds `qty` to `item` and returns the new quantity. Saturates at `u64::MAX`.
    pub fn increase(&mut self, item: &str, qty: u64) -> u64 {
        let total = self.get(item).unwrap_or(0).saturating_add(qty);
        self.set(item, total);
        total
    }

    /// Takes `qty` away from `item`, deleting it when nothing is left.
    pub fn decrease(&mut self, item: &str, qty: u64) -> Removal {
        let Some(current) = self.get(item) else {
            return Removal::Missing;
        };
        match current.checked_sub(qty) {
            Some(remaining) if remaining > 0 => {
                self.set(item, remaining);
                Removal::Decremented { remaining }
            }
            _ => {
                self.delete(item);
                Removal::Deleted
            }
        }
    }

    pub fn delete(&mut self, item: &str) -> Option<u64> {
        let slot = self.slots.remove(item)?;
        self.order.remove(&slot.seq);
        Some(slot.qty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order
            .values()
            .filter_map(|item| self.slots.get(item).map(|slot| (item.as_str(), slot.qty)))
    }

    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.values().map(String::as_str)
    }
}

/// Two stocks are equal when they hold the same items, quantities and order.
impl PartialEq for Stock {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Stock {}

impl<S: AsRef<str>> FromIterator<(S, u64)> for Stock {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut stock = Stock::new();
        for (item, qty) in iter {
            stock.set(item.as_ref(), qty);
        }
        stock
    }
}

impl Serialize for Stock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (item, qty) in self.iter() {
            map.serialize_entry(item, &qty)?;
        }
        map.end()
    }
}

struct StockVisitor;

impl<'de> Visitor<'de> for StockVisitor {
    type Value = Stock;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of item names to non-negative whole quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Stock, A::Error> {
        let mut stock = Stock::new();
        while let Some((item, qty)) = access.next_entry::<String, u64>()? {
            stock.set(&item, qty);
        }
        Ok(stock)
    }
}

impl<'de> Deserialize<'de> for Stock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StockVisitor)
    }
}

/// What a removal did to the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Decremented { remaining: u64 },
    Deleted,
    Missing,
}

/// One mutation recorded during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

impl LogEntry {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            at: Local::now(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut stock = Stock::new();
        stock.increase("pear", 1);
        stock.increase("apple", 4);
        stock.increase("fig", 2);
        stock.increase("pear", 5);

        let items: Vec<&str> = stock.items().collect();
        assert_eq!(items, vec!["pear", "apple", "fig"]);
        assert_eq!(stock.get("pear"), Some(6));
    }

    #[test]
    fn test_readded_item_moves_to_end() {
        let mut stock: Stock = [("apple", 1), ("banana", 2)].into_iter().collect();
        assert_eq!(stock.decrease("apple", 1), Removal::Deleted);
        stock.increase("apple", 3);

        let items: Vec<&str> = stock.items().collect();
        assert_eq!(items, vec!["banana", "apple"]);
    }

    #[test]
    fn test_decrease_deletes_at_or_below_zero() {
        let mut stock: Stock = [("apple", 5)].into_iter().collect();
        assert_eq!(
            stock.decrease("apple", 2),
            Removal::Decremented { remaining: 3 }
        );
        assert_eq!(stock.decrease("apple", 10), Removal::Deleted);
        assert!(!stock.contains("apple"));
        assert_eq!(stock.decrease("apple", 1), Removal::Missing);
    }

    #[test]
    fn test_zero_quantity_is_never_stored() {
        let mut stock = Stock::new();
        assert_eq!(stock.increase("orange", 0), 0);
        assert!(stock.is_empty());

        let stock: Stock = [("a", 0), ("b", 1)].into_iter().collect();
        assert_eq!(stock.len(), 1);
    }

    #[test]
    fn test_increase_saturates() {
        let mut stock: Stock = [("bolt", u64::MAX - 1)].into_iter().collect();
        assert_eq!(stock.increase("bolt", 10), u64::MAX);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: Stock = [("x", 1), ("y", 2)].into_iter().collect();
        let b: Stock = [("y", 2), ("x", 1)].into_iter().collect();
        let c: Stock = [("x", 1), ("y", 2)].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_serde_keeps_document_order() {
        let stock: Stock = serde_json::from_str(r#"{"zeta": 3, "alpha": 1, "mid": 0}"#).unwrap();
        let items: Vec<&str> = stock.items().collect();
        assert_eq!(items, vec!["zeta", "alpha"]);

        let json = serde_json::to_string(&stock).unwrap();
        assert_eq!(json, r#"{"zeta":3,"alpha":1}"#);
    }

    #[test]
    fn test_serde_rejects_negative_quantities() {
        assert!(serde_json::from_str::<Stock>(r#"{"apple": -2}"#).is_err());
        assert!(serde_json::from_str::<Stock>(r#"{"apple": "two"}"#).is_err());
    }

    #[test]
    fn test_log_entry_display() {
        let entry = LogEntry::now("Added 10 of apple");
        let rendered = entry.to_string();
        assert!(rendered.ends_with(": Added 10 of apple"));
    }
}
