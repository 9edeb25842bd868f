//! Aggregate root trait: a consistency boundary owning a set of member entities.

use crate::entity::Entity;

/// Aggregate root marker + minimal interface.
///
/// The root is the only entry point to its members. Callers may mutate member
/// state through [`AggregateRoot::members_mut`], but cannot add or remove members:
/// membership is fixed when the aggregate is built.
pub trait AggregateRoot: Entity {
    /// Entity type owned by this aggregate.
    type Member: Entity;

    /// Members in storage order (the order carries no meaning).
    fn members(&self) -> &[Self::Member];

    /// Mutable access to member state; the slice length cannot change.
    fn members_mut(&mut self) -> &mut [Self::Member];
}
