//! CSV spreadsheet persistence for the inventory.
//!
//! The file is a single table whose first row is [`COLUMN_HEADINGS`]. Columns
//! are matched by heading on read and written in heading order.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use inventrent_core::DomainError;
use inventrent_inventory::{COLUMN_HEADINGS, Inventory, ItemRow, LoadReport};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on inventory file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid csv in inventory file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("inventory file {}, line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

/// One row as found in the file; every cell is coerced afterwards.
#[derive(Debug, Deserialize)]
struct SheetRecord {
    #[serde(rename = "Item ID")]
    id: String,
    #[serde(rename = "Item Name")]
    name: String,
    #[serde(rename = "Stock")]
    stock: String,
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Supplier")]
    supplier: String,
    #[serde(rename = "Low Stock Threshold")]
    low_stock_threshold: String,
}

/// Where a record ends up after cell coercion.
enum Coerced {
    Row(ItemRow),
    InvalidId(DomainError),
}

impl SheetRecord {
    /// Numeric cells are read with surrounding blanks ignored; text cells are
    /// kept exactly as stored.
    fn coerce(self) -> Result<Coerced, String> {
        // Ids are never coerced: "5.0" is as invalid as "abc".
        let id = match self.id.trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                return Ok(Coerced::InvalidId(DomainError::invalid_key(self.id.trim())));
            }
        };

        let stock = coerce_int(&self.stock).ok_or_else(|| {
            format!("stock `{}` is not a number", self.stock)
        })?;
        let price = coerce_float(&self.price).ok_or_else(|| {
            format!("price `{}` is not a number", self.price)
        })?;
        let low_stock_threshold = coerce_int(&self.low_stock_threshold).ok_or_else(|| {
            format!(
                "low stock threshold `{}` is not a number",
                self.low_stock_threshold
            )
        })?;

        Ok(Coerced::Row(ItemRow {
            id,
            name: self.name,
            stock,
            unit: self.unit,
            price,
            supplier: self.supplier,
            low_stock_threshold,
        }))
    }
}

/// Integer cell; a floating-point cell is truncated toward zero.
fn coerce_int(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if let Ok(value) = cell.parse::<i64>() {
        return Some(value);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

fn coerce_float(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// File-backed inventory store (full read, full replace).
#[derive(Debug, Clone)]
pub struct SheetStore {
    path: PathBuf,
}

impl SheetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into an inventory.
    ///
    /// An absent file is an empty inventory. Rows with an unusable id are
    /// rejected and reported; any other uncoercible cell fails the load.
    pub fn load(&self) -> Result<LoadReport, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "inventory file absent; starting empty");
                return Ok(LoadReport::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);

        let mut report = LoadReport::default();
        for (index, record) in reader.deserialize::<SheetRecord>().enumerate() {
            // Line 1 is the header.
            let line = index as u64 + 2;
            let record = record.map_err(|source| self.csv_error(source))?;
            match record.coerce() {
                Ok(Coerced::Row(row)) => report.push_row(row),
                Ok(Coerced::InvalidId(err)) => report.reject(err),
                Err(reason) => {
                    return Err(StoreError::Malformed {
                        path: self.path.clone(),
                        line,
                        reason,
                    });
                }
            }
        }

        let report = report.finish();
        tracing::info!(
            path = %self.path.display(),
            items = report.inventory.len(),
            rejected = report.rejected.len(),
            "inventory loaded"
        );
        Ok(report)
    }

    /// Replace the file with the full contents of `inventory`.
    ///
    /// Writes a sibling temp file first and renames it over the target, so an
    /// interrupted save leaves the previous file intact.
    pub fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let tmp_path = self.tmp_path();
        let written = self.write_rows(&tmp_path, inventory).and_then(|()| {
            fs::rename(&tmp_path, &self.path).map_err(|source| self.io_error(source))
        });
        if let Err(err) = written {
            match fs::remove_file(&tmp_path) {
                Err(cleanup) if cleanup.kind() != io::ErrorKind::NotFound => {
                    tracing::warn!(
                        path = %tmp_path.display(),
                        error = %cleanup,
                        "temp file left behind"
                    );
                }
                _ => {}
            }
            return Err(err);
        }

        tracing::info!(
            path = %self.path.display(),
            items = inventory.len(),
            "inventory saved"
        );
        Ok(())
    }

    fn write_rows(&self, tmp_path: &Path, inventory: &Inventory) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(tmp_path)
            .map_err(|source| self.csv_error(source))?;

        writer
            .write_record(COLUMN_HEADINGS)
            .map_err(|source| self.csv_error(source))?;
        for row in inventory.save() {
            writer
                .write_record(row_cells(&row))
                .map_err(|source| self.csv_error(source))?;
        }
        writer.flush().map_err(|source| self.io_error(source))
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

fn row_cells(row: &ItemRow) -> [String; 7] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.stock.to_string(),
        row.unit.clone(),
        row.price.to_string(),
        row.supplier.clone(),
        row.low_stock_threshold.to_string(),
    ]
}
