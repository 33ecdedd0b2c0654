//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Collections keyed by identity (the inventory store) look records up through
/// this trait rather than through per-type accessors.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
