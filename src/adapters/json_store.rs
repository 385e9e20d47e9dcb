use crate::domain::model::Stock;
use crate::domain::ports::StockStore;
use crate::utils::error::{InventoryError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stock kept as a pretty-printed JSON object on the local file system.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Renders a stock the way it is stored on disk: four-space indented JSON.
pub fn to_json(stock: &Stock) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    stock.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

impl StockStore for JsonFileStore {
    fn load(&self) -> Result<Stock> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(InventoryError::DataFileMissing {
                    path: self.location(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Err(InventoryError::EmptyDataFile {
                path: self.location(),
            });
        }

        serde_json::from_str(&data).map_err(|source| InventoryError::ParseError {
            path: self.location(),
            source,
        })
    }

    fn save(&self, stock: &Stock) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = to_json(stock)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
