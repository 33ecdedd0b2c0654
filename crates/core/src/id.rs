//! Strongly-typed identifiers used across the domain.

use crate::error::DomainError;

/// Identifier of an inventory item: a positive integer.
///
/// The only way to obtain one is through validation, so holding an `ItemId`
/// proves the key is well-formed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Validate a raw integer key.
    pub fn new(raw: i64) -> Result<Self, DomainError> {
        if raw > 0 {
            Ok(Self(raw as u64))
        } else {
            Err(DomainError::invalid_key(raw))
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0 as i64
    }
}
