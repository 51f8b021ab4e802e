//! Trait dispatch: the per-entity capability protocol.
//!
//! Each capability answers three questions, dispatched in descending
//! interaction order: may a mover enter my cell (`can_enter`), what happens
//! when it does (`on_enter`), and what do I do to my own stack between moves
//! (`apply_on_stack`). The first two drive movement and push chains; the
//! third drives the convergence loop's sink/win/lose settlement.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Direction, EngineConfig, EntityId};
use crate::events::{EngineEvent, SoundCue};

use super::{EnterOutcome, StackOutcome, TraitKind};

/// Stateless dispatcher for the capability protocol.
///
/// All state lives on the board; the dispatcher only encodes what each
/// capability does.
pub struct TraitDispatcher;

impl TraitDispatcher {
    /// Whether `mover` can take one step in `dir`.
    ///
    /// Rejects out-of-bounds targets, then asks every trait of every occupant
    /// of the target cell. `Push` occupants answer by checking the cell
    /// beyond them, so an entire push chain is validated before any mutation
    /// happens.
    #[must_use]
    pub fn can_move(board: &Board, mover: EntityId, dir: Direction) -> bool {
        let to = board.entity(mover).position.step(dir);
        if !board.is_valid(to) {
            return false;
        }

        board.stack_at(to).iter().all(|&occupant| {
            board
                .entity(occupant)
                .traits
                .iter_by_priority()
                .all(|kind| Self::can_enter(board, occupant, kind, dir))
        })
    }

    /// One trait's answer to "may something enter my carrier's cell, moving
    /// in `dir`".
    #[must_use]
    pub fn can_enter(board: &Board, occupant: EntityId, kind: TraitKind, dir: Direction) -> bool {
        match kind {
            // can't walk onto this entity, even when floating
            TraitKind::Stop => false,
            TraitKind::Push => Self::can_move(board, occupant, dir),
            _ => true,
        }
    }

    /// Commit `mover`'s step in `dir` and dispatch `on_enter` across the
    /// destination stack.
    ///
    /// The mover is inserted at the front of the destination stack, then the
    /// pre-existing occupants are walked in stack order, each trait in
    /// descending interaction order. `PullDown` re-splices the mover to sit
    /// directly after the occupant that produced it, so floaters end up
    /// visually above grounded entities; `Break` halts all further
    /// processing of this move.
    ///
    /// Every transitively moved instance is appended to `moved` in the order
    /// moves were committed. Callers must have validated the move with
    /// [`TraitDispatcher::can_move`].
    pub fn perform_move(
        board: &mut Board,
        config: &EngineConfig,
        mover: EntityId,
        dir: Direction,
        moved: &mut Vec<EntityId>,
        events: &mut Vec<EngineEvent>,
    ) {
        let from = board.entity(mover).position;
        let to = from.step(dir);

        board.move_entity(mover, from, to);
        moved.push(mover);

        let mut mover_slot = 0;
        let mut index = 1;
        'occupants: while index < board.stack_at(to).len() {
            let occupant = board.stack_at(to)[index];
            let kinds: SmallVec<[TraitKind; 4]> =
                board.entity(occupant).traits.iter_by_priority().collect();

            for kind in kinds {
                match Self::on_enter(board, config, occupant, kind, dir, moved, events) {
                    EnterOutcome::PullDown => {
                        let stack = board.stack_mut(to);
                        stack.remove(mover_slot);
                        mover_slot = index;
                        stack.insert(mover_slot, mover);
                    }
                    EnterOutcome::Break => break 'occupants,
                    EnterOutcome::Continue => {}
                }
            }

            index += 1;
        }

        board.normalize_layers(from);
        board.normalize_layers(to);

        let duration = config.move_duration;
        board.entity_mut(mover).begin_move(from, to, duration);
    }

    /// One trait's reaction to something entering its carrier's cell.
    fn on_enter(
        board: &mut Board,
        config: &EngineConfig,
        occupant: EntityId,
        kind: TraitKind,
        dir: Direction,
        moved: &mut Vec<EntityId>,
        events: &mut Vec<EngineEvent>,
    ) -> EnterOutcome {
        match kind {
            TraitKind::Float => EnterOutcome::PullDown,
            TraitKind::Push => {
                Self::perform_move(board, config, occupant, dir, moved, events);
                events.push(EngineEvent::Sound(SoundCue::Push));
                EnterOutcome::Break
            }
            _ => EnterOutcome::Continue,
        }
    }

    /// One trait's stack-level rule, applied between moves.
    ///
    /// `Win` and `Lose` look for a `You` carrier sharing both the carrier's
    /// cell and its float layer, then emit the terminal event. `Sink`
    /// destroys its carrier together with the first same-layer occupant that
    /// does not itself sink. Floating and grounded entities never interact
    /// here.
    pub fn apply_on_stack(
        board: &mut Board,
        carrier: EntityId,
        kind: TraitKind,
        events: &mut Vec<EngineEvent>,
    ) -> StackOutcome {
        match kind {
            TraitKind::Win => {
                Self::check_terminal(board, carrier, EngineEvent::Won, SoundCue::Win, events)
            }
            TraitKind::Lose => {
                Self::check_terminal(board, carrier, EngineEvent::Lost, SoundCue::Lose, events)
            }
            TraitKind::Sink => Self::apply_sink(board, carrier, events),
            _ => StackOutcome::Continue,
        }
    }

    fn check_terminal(
        board: &Board,
        carrier: EntityId,
        terminal: EngineEvent,
        cue: SoundCue,
        events: &mut Vec<EngineEvent>,
    ) -> StackOutcome {
        let carrier_ref = board.entity(carrier);
        let floats = carrier_ref.floats();
        let pos = carrier_ref.position;

        for &other in board.stack_at(pos) {
            let other_ref = board.entity(other);
            if other_ref.carries(TraitKind::You) && other_ref.floats() == floats {
                events.push(EngineEvent::Sound(cue));
                events.push(terminal);
                return StackOutcome::Break;
            }
        }

        StackOutcome::Continue
    }

    fn apply_sink(
        board: &mut Board,
        carrier: EntityId,
        events: &mut Vec<EngineEvent>,
    ) -> StackOutcome {
        let carrier_ref = board.entity(carrier);
        let floats = carrier_ref.floats();
        let pos = carrier_ref.position;

        let victim = board.stack_at(pos).iter().copied().find(|&other| {
            let other_ref = board.entity(other);
            other_ref.floats() == floats && !other_ref.carries(TraitKind::Sink)
        });
        let Some(victim) = victim else {
            return StackOutcome::Continue;
        };

        board.remove_entity(victim);
        board.remove_entity(carrier);
        events.push(EngineEvent::Sound(SoundCue::Sink));
        events.push(EngineEvent::StacksChanged(vec![pos]));

        StackOutcome::Refresh
    }
}
