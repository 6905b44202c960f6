//! CSV loader for predicted order records.
//!
//! Input schema: one row per record with columns `Factory`, `Product_ID`,
//! `Warehouse`, `Demand` (non-negative), `Delay` (non-negative, days) and
//! `Sustainable_Order` (0 or 1). Violations are reported as load errors
//! naming the row and field rather than silently coerced.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ErrorContext, LoadErrorKind, OrderAdvisorError, Result};
use crate::model::OrderRecord;

/// Required input columns, in no particular order.
const REQUIRED_COLUMNS: [&str; 6] = [
    "Factory",
    "Product_ID",
    "Warehouse",
    "Demand",
    "Delay",
    "Sustainable_Order",
];

/// One CSV row as it appears on disk.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Factory")]
    factory: String,
    #[serde(rename = "Product_ID")]
    product: String,
    #[serde(rename = "Warehouse")]
    warehouse: String,
    #[serde(rename = "Demand")]
    demand: f64,
    #[serde(rename = "Delay")]
    delay: f64,
    #[serde(rename = "Sustainable_Order")]
    sustainable: f64,
}

impl RawRow {
    /// Validate the row and convert it into a domain record.
    ///
    /// `row` is the 1-based data row number (header excluded), used in
    /// error messages.
    fn into_record(self, row: usize) -> Result<OrderRecord> {
        if !self.demand.is_finite() || self.demand < 0.0 {
            return Err(OrderAdvisorError::invalid_value(
                row,
                "Demand",
                format!("must be a non-negative number, got {}", self.demand),
            ));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(OrderAdvisorError::invalid_value(
                row,
                "Delay",
                format!("must be a non-negative number, got {}", self.delay),
            ));
        }
        let sustainable = if self.sustainable == 0.0 {
            false
        } else if self.sustainable == 1.0 {
            true
        } else {
            return Err(OrderAdvisorError::invalid_value(
                row,
                "Sustainable_Order",
                format!("must be 0 or 1, got {}", self.sustainable),
            ));
        };

        Ok(OrderRecord {
            factory: self.factory,
            product: self.product,
            warehouse: self.warehouse,
            demand: self.demand,
            delay: self.delay,
            sustainable,
        })
    }
}

/// Read and validate order records from a CSV file.
pub fn read_records(path: &Path) -> Result<Vec<OrderRecord>> {
    let file = File::open(path).map_err(|e| OrderAdvisorError::io(path, e))?;
    read_records_from_reader(file)
        .with_context(|| format!("reading records from {}", path.display()))
}

/// Read and validate order records from any reader.
///
/// Exposed separately so tests and callers with in-memory data don't need
/// to touch the filesystem.
pub fn read_records_from_reader<R: Read>(reader: R) -> Result<Vec<OrderRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    validate_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = row?;
        records.push(row.into_record(idx + 1)?);
    }

    if records.is_empty() {
        return Err(OrderAdvisorError::load(
            "input file has headers but no data rows",
            LoadErrorKind::EmptyDataset,
        ));
    }

    tracing::info!(rows = records.len(), "loaded order records");
    Ok(records)
}

/// Check that every required column is present before deserializing rows,
/// so a missing column is reported by name instead of as a per-row
/// deserialization failure.
fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(OrderAdvisorError::missing_column(column));
        }
    }
    Ok(())
}
