//! Engine-produced events.
//!
//! The engine reports everything external collaborators need as plain data:
//! audio cue names, changed cells for targeted redraws, terminal signals,
//! and non-fatal engine errors. Consumers drain them from the turn report;
//! the core never calls out.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Named audio cue for an external audio collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Push,
    Sink,
    Win,
    Lose,
}

impl SoundCue {
    /// The cue's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SoundCue::Push => "push",
            SoundCue::Sink => "sink",
            SoundCue::Win => "win",
            SoundCue::Lose => "lose",
        }
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something the engine did that external collaborators react to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Play a named sound.
    Sound(SoundCue),

    /// These cells' stacks changed; redraw them and their neighborhoods.
    StacksChanged(Vec<Position>),

    /// A `Win` carrier and a `You` carrier share a cell and float layer.
    Won,

    /// A `Lose` carrier and a `You` carrier share a cell and float layer.
    Lost,

    /// A stack failed to settle within the pass cap. Non-fatal; the stack
    /// keeps its last-evaluated state.
    ConvergenceOverflow(Position),
}

/// Everything that happened during one call to `Engine::step`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Whether any controlled instance committed a move.
    pub moved: bool,

    /// Events in emission order.
    pub events: Vec<EngineEvent>,
}

impl TurnReport {
    /// Whether this turn detected a win.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.events.iter().any(|event| matches!(event, EngineEvent::Won))
    }

    /// Whether this turn detected a loss.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.events.iter().any(|event| matches!(event, EngineEvent::Lost))
    }

    /// Cells whose stacks changed this turn, in emission order.
    pub fn changed_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.events
            .iter()
            .filter_map(|event| match event {
                EngineEvent::StacksChanged(cells) => Some(cells.iter().copied()),
                _ => None,
            })
            .flatten()
    }

    /// Sound cues fired this turn, in emission order.
    pub fn sounds(&self) -> impl Iterator<Item = SoundCue> + '_ {
        self.events.iter().filter_map(|event| match event {
            EngineEvent::Sound(cue) => Some(*cue),
            _ => None,
        })
    }
}
