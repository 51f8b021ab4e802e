//! Capabilities and their dispatch outcomes.
//!
//! A capability ("trait" in rule text) is behavior bound to every instance of
//! a noun kind by a `[subject] is [trait]` rule. Each instance carries its
//! active capabilities as an explicit bitset, mutated by the behavior binder;
//! dispatch walks the set in descending interaction order.

mod dispatch;

pub use dispatch::TraitDispatcher;

use serde::{Deserialize, Serialize};

/// A bindable capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitKind {
    /// Responds to directional input.
    You,
    /// Displaced one cell further by anything entering its cell.
    Push,
    /// Destroys itself and a co-located same-layer entity.
    Sink,
    /// Nothing may enter its cell.
    Stop,
    /// Ends the level in victory when a `You` carrier shares its cell.
    Win,
    /// Ends the level in defeat when a `You` carrier shares its cell.
    Lose,
    /// Sits on the floating layer, above grounded entities.
    Float,
}

impl TraitKind {
    /// All kinds in descending interaction order, i.e. dispatch order.
    pub const BY_PRIORITY: [TraitKind; 7] = [
        TraitKind::Float,
        TraitKind::Stop,
        TraitKind::Push,
        TraitKind::Sink,
        TraitKind::Lose,
        TraitKind::Win,
        TraitKind::You,
    ];

    /// Interaction order. Higher values are dispatched first.
    #[must_use]
    pub const fn interaction_order(self) -> i32 {
        match self {
            TraitKind::You => 100,
            TraitKind::Win => 200,
            TraitKind::Lose => 300,
            TraitKind::Sink => 400,
            TraitKind::Push => 500,
            TraitKind::Stop => 600,
            TraitKind::Float => 700,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// The set of capabilities currently bound to an entity instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitSet(u8);

impl TraitSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Bind a capability. Binding twice is a no-op.
    pub fn insert(&mut self, kind: TraitKind) {
        self.0 |= kind.bit();
    }

    /// Unbind a capability. Unbinding an absent capability is a no-op.
    pub fn remove(&mut self, kind: TraitKind) {
        self.0 &= !kind.bit();
    }

    /// Whether a capability is bound.
    #[must_use]
    pub const fn contains(self, kind: TraitKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Whether no capability is bound.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of bound capabilities.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Bound capabilities in descending interaction order.
    pub fn iter_by_priority(self) -> impl Iterator<Item = TraitKind> {
        TraitKind::BY_PRIORITY
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

/// Outcome of one trait's `on_enter` dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnterOutcome {
    /// Re-splice the mover to sit directly after the trait's carrier in the
    /// destination stack.
    PullDown,
    /// Halt all further processing of this move.
    Break,
    /// Proceed with the next trait or occupant.
    Continue,
}

/// Outcome of one trait's stack-rule application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackOutcome {
    /// The stack changed structurally; re-evaluate it from scratch.
    Refresh,
    /// Stop evaluating this stack.
    Break,
    /// Nothing happened; proceed with the next trait.
    Continue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_operations() {
        let mut set = TraitSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);

        set.insert(TraitKind::Push);
        set.insert(TraitKind::You);
        assert!(set.contains(TraitKind::Push));
        assert!(set.contains(TraitKind::You));
        assert!(!set.contains(TraitKind::Stop));
        assert_eq!(set.len(), 2);

        set.remove(TraitKind::Push);
        assert!(!set.contains(TraitKind::Push));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = TraitSet::empty();
        set.insert(TraitKind::Sink);
        set.insert(TraitKind::Sink);
        assert_eq!(set.len(), 1);

        set.remove(TraitKind::Sink);
        set.remove(TraitKind::Sink);
        assert!(set.is_empty());
    }

    #[test]
    fn test_priority_iteration_is_descending() {
        let mut set = TraitSet::empty();
        set.insert(TraitKind::You);
        set.insert(TraitKind::Float);
        set.insert(TraitKind::Sink);

        let kinds: Vec<_> = set.iter_by_priority().collect();
        assert_eq!(kinds, vec![TraitKind::Float, TraitKind::Sink, TraitKind::You]);
    }

    #[test]
    fn test_by_priority_covers_every_kind_in_order() {
        let orders: Vec<_> = TraitKind::BY_PRIORITY
            .iter()
            .map(|kind| kind.interaction_order())
            .collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(orders, sorted);
        assert_eq!(orders.len(), 7);
    }

    #[test]
    fn test_relative_interaction_order() {
        assert!(TraitKind::You.interaction_order() < TraitKind::Win.interaction_order());
        assert!(TraitKind::Win.interaction_order() < TraitKind::Sink.interaction_order());
        assert!(TraitKind::Lose.interaction_order() < TraitKind::Sink.interaction_order());
        assert!(TraitKind::Sink.interaction_order() < TraitKind::Push.interaction_order());
        assert!(TraitKind::Push.interaction_order() < TraitKind::Stop.interaction_order());
        assert!(TraitKind::Stop.interaction_order() < TraitKind::Float.interaction_order());
    }
}
