//! Infrastructure layer: the spreadsheet file and process configuration.

pub mod config;
pub mod sheet;

pub use config::{AppConfig, ConfigError};
pub use sheet::{SheetStore, StoreError};
