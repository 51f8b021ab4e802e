//! Capability rebinding.

use crate::board::Board;

use super::{Rule, RuleExtractor, RuleSet};

/// Applies the diff between the previous and current rule sets to every live
/// instance.
///
/// Traits bind to noun kinds, not instances: adding a rule grants the trait
/// to every current instance of the target noun, removing it revokes the
/// trait from all of them. Removals apply before additions. Rebinding with
/// an unchanged board is a no-op.
#[derive(Clone, Debug, Default)]
pub struct BehaviorBinder {
    previous: RuleSet,
}

impl BehaviorBinder {
    /// Create a binder with no rules bound yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule set from the most recent rebind.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.previous
    }

    /// Re-extract rules from the board and apply the minimum capability diff.
    pub fn rebind(&mut self, board: &mut Board) {
        let current = RuleExtractor::extract(board);

        for rule in self.previous.difference(&current) {
            Self::revoke(board, *rule);
        }
        for rule in current.difference(&self.previous) {
            Self::grant(board, *rule);
        }

        self.previous = current;
    }

    fn revoke(board: &mut Board, rule: Rule) {
        let Some(target) = rule.subject.subject_target() else {
            return;
        };
        for instance in board.entities_mut() {
            if instance.noun == target {
                instance.traits.remove(rule.trait_kind);
            }
        }
    }

    fn grant(board: &mut Board, rule: Rule) {
        let Some(target) = rule.subject.subject_target() else {
            return;
        };
        for instance in board.entities_mut() {
            if instance.noun == target {
                instance.traits.insert(rule.trait_kind);
            }
        }
    }
}
