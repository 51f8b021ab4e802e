//! Stack convergence: bounded fixed-point settlement of stack rules.

use crate::board::Board;
use crate::core::{EngineConfig, EntityId, Position};
use crate::events::EngineEvent;
use crate::traits::{StackOutcome, TraitDispatcher, TraitKind};

/// Re-applies stack-level rules across the whole board until stable.
pub struct StackConvergence;

impl StackConvergence {
    /// Settle every stack on the board, row-major.
    ///
    /// Each stack is re-evaluated until a pass produces no structural change
    /// (`Continue` throughout) or an explicit `Break`, capped at
    /// `config.max_stack_passes` passes. Hitting the cap usually means a
    /// contradictory rule configuration; it is reported and the stack is
    /// left in its last-evaluated state while the rest of the board
    /// continues.
    pub fn settle(board: &mut Board, config: &EngineConfig, events: &mut Vec<EngineEvent>) {
        for y in 0..board.height() as i32 {
            for x in 0..board.width() as i32 {
                let pos = Position::new(x, y);

                let mut settled = false;
                for _ in 0..config.max_stack_passes {
                    match Self::apply_stack(board, pos, events) {
                        StackOutcome::Refresh => {}
                        StackOutcome::Break | StackOutcome::Continue => {
                            settled = true;
                            break;
                        }
                    }
                }

                if !settled {
                    tracing::error!(x, y, "stack rules did not settle within the pass cap");
                    events.push(EngineEvent::ConvergenceOverflow(pos));
                }
            }
        }
    }

    /// One pass over one stack.
    ///
    /// Traits are dispatched in descending `interaction_order - stack_index`
    /// order, biasing ties toward entities earlier in the stack. `Refresh`
    /// aborts the pass so the caller restarts it against the mutated stack.
    fn apply_stack(
        board: &mut Board,
        pos: Position,
        events: &mut Vec<EngineEvent>,
    ) -> StackOutcome {
        let mut ordered: Vec<(i32, EntityId, TraitKind)> = Vec::new();
        for (index, &id) in board.stack_at(pos).iter().enumerate() {
            for kind in board.entity(id).traits.iter_by_priority() {
                ordered.push((kind.interaction_order() - index as i32, id, kind));
            }
        }
        ordered.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, id, kind) in ordered {
            if !board.contains(id) {
                continue;
            }
            match TraitDispatcher::apply_on_stack(board, id, kind, events) {
                StackOutcome::Refresh => return StackOutcome::Refresh,
                StackOutcome::Break => return StackOutcome::Break,
                StackOutcome::Continue => {}
            }
        }

        StackOutcome::Continue
    }
}
