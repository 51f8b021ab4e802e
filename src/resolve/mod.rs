//! Turn resolution.
//!
//! One directional input becomes one turn: every controlled instance
//! attempts the step, committed moves are reported cell by cell, and the
//! board's rules are re-derived and settled once at the end. A rejected
//! move mutates nothing and emits nothing.

mod convergence;

pub use convergence::StackConvergence;

use crate::board::Board;
use crate::core::{Direction, EngineConfig};
use crate::events::EngineEvent;
use crate::rules::BehaviorBinder;
use crate::traits::TraitDispatcher;

/// Orchestrates one player-initiated move across all controlled instances.
pub struct MoveResolver;

impl MoveResolver {
    /// Attempt to move every `You`-carrying instance one step in `dir`.
    ///
    /// Movers act in row-major board order, snapshotted before anything
    /// moves; an instance displaced by an earlier mover still takes its own
    /// step. Each accepted mover reports the cells its chain touched (its
    /// origin plus every transitively moved instance's destination). When
    /// at least one move commits, rules are re-extracted and rebound and
    /// stack rules are settled.
    ///
    /// Returns whether any move was committed.
    pub fn resolve(
        board: &mut Board,
        config: &EngineConfig,
        binder: &mut BehaviorBinder,
        dir: Direction,
        events: &mut Vec<EngineEvent>,
    ) -> bool {
        let mut any_moved = false;

        for mover in board.controlled() {
            if !TraitDispatcher::can_move(board, mover, dir) {
                continue;
            }

            let start = board.entity(mover).position;
            let mut moved = Vec::new();
            TraitDispatcher::perform_move(board, config, mover, dir, &mut moved, events);

            let mut positions = Vec::with_capacity(moved.len() + 1);
            positions.push(start);
            for &id in moved.iter().rev() {
                positions.push(board.entity(id).position);
            }
            for &pos in &positions {
                board.normalize_layers(pos);
            }
            events.push(EngineEvent::StacksChanged(positions));

            any_moved = true;
        }

        if any_moved {
            binder.rebind(board);
            StackConvergence::settle(board, config, events);
        }

        any_moved
    }
}
