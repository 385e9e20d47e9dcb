pub mod inventory;
pub mod persistence;
pub mod report;

pub use crate::domain::model::{LogEntry, Removal, Stock};
pub use crate::domain::ports::{ConfigProvider, StockStore};
pub use crate::utils::error::Result;
