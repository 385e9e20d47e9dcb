use crate::domain::model::Stock;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;

/// Somewhere a stock can be read from and written back to.
pub trait StockStore {
    fn load(&self) -> Result<Stock>;
    fn save(&self, stock: &Stock) -> Result<()>;
    /// Human-readable location, used in log lines.
    fn location(&self) -> String;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn low_stock_threshold(&self) -> u64;
    fn log_file(&self) -> Option<&str>;
    fn log_level(&self) -> &str;
    fn log_format(&self) -> LogFormat;
}
