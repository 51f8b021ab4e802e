//! Engine facade.
//!
//! `Engine` owns one playthrough: the board, its derived rule set, and the
//! turn loop. It holds no process-wide state; drop it and the playthrough is
//! gone. Pacing is the caller's job: the core resolves each move
//! instantaneously, and callers poll instance animations before accepting
//! further input.

use crate::board::{loader, Board, LevelError};
use crate::core::{Direction, EngineConfig};
use crate::events::TurnReport;
use crate::resolve::MoveResolver;
use crate::rules::{BehaviorBinder, RuleSet};

/// One playthrough of one level.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    binder: BehaviorBinder,
    config: EngineConfig,
}

impl Engine {
    /// Build an engine from level bytes and derive the initial rule set.
    ///
    /// Stack rules are not applied at load; they first run after a move, so
    /// a level may legally start with, say, a player standing on water.
    pub fn from_level(bytes: &[u8]) -> Result<Self, LevelError> {
        Ok(Self::new(loader::load(bytes)?))
    }

    /// Wrap an already-populated board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_config(board, EngineConfig::default())
    }

    /// Wrap a board with explicit configuration.
    #[must_use]
    pub fn with_config(mut board: Board, config: EngineConfig) -> Self {
        let mut binder = BehaviorBinder::new();
        binder.rebind(&mut board);
        Self {
            board,
            binder,
            config,
        }
    }

    /// Resolve one directional input for every controlled instance.
    pub fn step(&mut self, dir: Direction) -> TurnReport {
        let mut events = Vec::new();
        let moved = MoveResolver::resolve(
            &mut self.board,
            &self.config,
            &mut self.binder,
            dir,
            &mut events,
        );
        TurnReport { moved, events }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setup and tooling. Rules are re-derived on
    /// the next step, not immediately.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The current derived rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        self.binder.rules()
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NounKind, Position};
    use crate::rules::Rule;
    use crate::traits::TraitKind;

    #[test]
    fn test_from_level_derives_rules() {
        // [player-subject][is][you] in a single row, player below
        let bytes = [3, 2, 12, 4, 19, 5, 0, 0];
        let engine = Engine::from_level(&bytes).unwrap();

        assert!(engine
            .rules()
            .contains(&Rule::new(NounKind::SubjectPlayer, TraitKind::You)));

        let player = engine.board().stack_at(Position::new(0, 1))[0];
        assert!(engine.board().entity(player).carries(TraitKind::You));
    }

    #[test]
    fn test_load_does_not_settle_stacks() {
        // player starts on sinking water; nothing happens until a move
        let mut board = Board::new(2, 1);
        let player = board.place(Position::new(0, 0), NounKind::Player);
        let water = board.place(Position::new(0, 0), NounKind::Water);
        board.entity_mut(player).traits.insert(TraitKind::You);
        board.entity_mut(water).traits.insert(TraitKind::Sink);

        let engine = Engine::new(board);
        assert!(engine.board().contains(player));
        assert!(engine.board().contains(water));
    }

    #[test]
    fn test_step_without_controlled_instances() {
        let mut board = Board::new(2, 1);
        board.place(Position::new(0, 0), NounKind::Rock);

        let mut engine = Engine::new(board);
        let report = engine.step(Direction::Right);
        assert!(!report.moved);
        assert!(report.events.is_empty());
    }

    #[test]
    fn test_step_moves_controlled_instance() {
        let bytes = [3, 2, 12, 4, 19, 5, 0, 0];
        let mut engine = Engine::from_level(&bytes).unwrap();

        let report = engine.step(Direction::Right);
        assert!(report.moved);

        let player = engine.board().stack_at(Position::new(1, 1))[0];
        assert_eq!(engine.board().entity(player).noun, NounKind::Player);
    }
}
