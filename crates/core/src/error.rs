//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the `Display` text is the explanation shown
/// to the operator, and the inventory is left untouched when one is returned.
/// A missing persistence file is deliberately absent here; it loads as an
/// empty inventory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The supplied identifier is not a positive integer.
    ///
    /// Carries the offending value as text so that malformed cells from a
    /// file (`"abc"`, `"5.5"`) and out-of-range integers report the same way.
    #[error("Invalid Item ID format: {0}")]
    InvalidKey(String),

    /// An item with this identifier is already in the inventory.
    #[error(
        "An item with ID {0} already exists in the inventory. Try adding an item with a unique ID."
    )]
    DuplicateKey(ItemId),

    /// No item matched the requested id or name.
    #[error("Item not found.")]
    NotFound,
}

impl DomainError {
    pub fn invalid_key(raw: impl ToString) -> Self {
        Self::InvalidKey(raw.to_string())
    }

    pub fn duplicate_key(id: ItemId) -> Self {
        Self::DuplicateKey(id)
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
