use crate::adapters::json_store::to_json;
use crate::domain::model::Stock;
use crate::utils::error::Result;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown report format '{}', expected text, csv or json",
                other
            )),
        }
    }
}

pub fn write_report<W: Write>(out: &mut W, stock: &Stock, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            writeln!(out, "\nItems Report:")?;
            for (item, qty) in stock.iter() {
                writeln!(out, "{} -> {}", item, qty)?;
            }
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["item", "quantity"])?;
            for (item, qty) in stock.iter() {
                writer.write_record([item, qty.to_string().as_str()])?;
            }
            writer.flush()?;
        }
        ReportFormat::Json => out.write_all(&to_json(stock)?)?,
    }
    Ok(())
}

/// Prints the plain-text report to stdout. Write failures are only logged.
pub fn print_report(stock: &Stock) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, stock, ReportFormat::Text) {
        tracing::error!("Error printing report: {}", e);
    }
}
