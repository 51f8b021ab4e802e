//! Rule extraction from board layout.

use crate::board::Board;
use crate::core::{NounKind, Position};

use super::{Rule, RuleSet};

/// Scans the board for connector cells and derives the current rule set.
pub struct RuleExtractor;

impl RuleExtractor {
    /// Derive every rule currently formed on the board.
    ///
    /// A connector anchors a vertical rule when both its vertical neighbors
    /// are on the board, and likewise horizontally; a single connector can
    /// anchor both at once. Connectors on the border never form a rule in
    /// the direction that lacks both neighbors.
    #[must_use]
    pub fn extract(board: &Board) -> RuleSet {
        let mut rules = RuleSet::default();

        for y in 0..board.height() as i32 {
            for x in 0..board.width() as i32 {
                let pos = Position::new(x, y);
                for &id in board.stack_at(pos) {
                    if board.entity(id).noun == NounKind::ConnectorIs {
                        Self::extract_around_connector(board, pos, &mut rules);
                    }
                }
            }
        }

        rules
    }

    /// Rules anchored on one connector cell.
    fn extract_around_connector(board: &Board, pos: Position, rules: &mut RuleSet) {
        let width = board.width() as i32;
        let height = board.height() as i32;

        if pos.y != 0 && pos.y != height - 1 {
            Self::cross_stacks(
                board,
                Position::new(pos.x, pos.y - 1),
                Position::new(pos.x, pos.y + 1),
                rules,
            );
        }

        if pos.x != 0 && pos.x != width - 1 {
            Self::cross_stacks(
                board,
                Position::new(pos.x - 1, pos.y),
                Position::new(pos.x + 1, pos.y),
                rules,
            );
        }
    }

    /// Cross every subject token in one stack with every trait token in the
    /// other, in both orientations.
    fn cross_stacks(board: &Board, one: Position, two: Position, rules: &mut RuleSet) {
        for &primary in board.stack_at(one) {
            let primary_noun = board.entity(primary).noun;
            let primary_is_subject = primary_noun.is_subject_token();
            let primary_trait = primary_noun.trait_kind();

            if !primary_is_subject && primary_trait.is_none() {
                continue;
            }

            for &secondary in board.stack_at(two) {
                let secondary_noun = board.entity(secondary).noun;

                if primary_is_subject {
                    if let Some(trait_kind) = secondary_noun.trait_kind() {
                        rules.insert(Rule::new(primary_noun, trait_kind));
                    }
                }

                if secondary_noun.is_subject_token() {
                    if let Some(trait_kind) = primary_trait {
                        rules.insert(Rule::new(secondary_noun, trait_kind));
                    }
                }
            }
        }
    }
}
