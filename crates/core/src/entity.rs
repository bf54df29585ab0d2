//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Both record collections rely on ids being unique within a collection;
/// stores look records up and remove them through this trait.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Find the position of the entity with `id` in `items`.
pub fn position_of<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
