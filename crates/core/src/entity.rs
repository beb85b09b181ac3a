//! Entity trait: records with a stable identity.

/// Entity marker + minimal interface.
///
/// Every fixture record (orders, work orders, BOMs, stock movements) has an
/// identity that outlives any filtered view of it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Look up a record by identity, preserving the first match in source order.
pub fn find_by_id<'a, E: Entity>(records: &'a [E], id: &E::Id) -> Option<&'a E> {
    records.iter().find(|r| r.id() == id)
}
