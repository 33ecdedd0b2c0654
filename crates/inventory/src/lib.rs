//! Inventory domain module.
//!
//! This crate contains the inventory store: an ordered, uniquely-keyed
//! collection of stock items plus the queries and reports built on it.
//! It is deterministic domain logic (no terminal, no files).

pub mod item;
pub mod report;
pub mod row;
pub mod store;

pub use inventrent_core::{DomainError, DomainResult, Entity, ItemId};
pub use item::{Item, NewItem};
pub use report::{LowStock, Summary, SummaryLine};
pub use row::{COLUMN_HEADINGS, ItemRow};
pub use store::{Inventory, LoadReport};
