//! Derived rules.
//!
//! Rules are never authored or persisted: the full set is re-derived from
//! board layout after every completed move, then diffed into capability
//! changes on live instances. A rule binds to a noun kind, so every current
//! and future instance of that kind is affected, not any one instance.

mod binder;
mod extractor;

pub use binder::BehaviorBinder;
pub use extractor::RuleExtractor;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::NounKind;
use crate::traits::TraitKind;

/// A `[subject] is [trait]` rule derived from board layout.
///
/// `subject` is the subject token kind; the binder resolves it to the
/// regular noun it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// The subject token on the board, e.g. `SubjectRock`.
    pub subject: NounKind,
    /// The capability the rule binds.
    pub trait_kind: TraitKind,
}

impl Rule {
    /// Create a rule.
    #[must_use]
    pub const fn new(subject: NounKind, trait_kind: TraitKind) -> Self {
        Self {
            subject,
            trait_kind,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} is {:?}", self.subject, self.trait_kind)
    }
}

/// The rule set for one tick. Duplicate arrangements collapse.
pub type RuleSet = FxHashSet<Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_display() {
        let rule = Rule::new(NounKind::SubjectRock, TraitKind::Push);
        assert_eq!(format!("{rule}"), "SubjectRock is Push");
    }

    #[test]
    fn test_rule_set_collapses_duplicates() {
        let mut rules = RuleSet::default();
        rules.insert(Rule::new(NounKind::SubjectRock, TraitKind::Push));
        rules.insert(Rule::new(NounKind::SubjectRock, TraitKind::Push));
        assert_eq!(rules.len(), 1);
    }
}
