//! Entity instances.
//!
//! `EntityInstance` is one entity on the board at one moment: its noun kind,
//! cell, layer within the cell stack, and the capability set rules currently
//! bind to its kind. The interpolation state for a committed move also lives
//! here, owned by the instance but consumed only by external rendering code.

use serde::{Deserialize, Serialize};

use crate::core::noun::NounKind;
use crate::core::position::Position;
use crate::traits::{TraitKind, TraitSet};

/// Unique identifier for an entity instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Visual interpolation state for a committed move.
///
/// Logic state is final the moment a move commits; this only carries what a
/// renderer needs to animate the transition afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveAnimation {
    /// Cell the move started from.
    pub from: Position,
    /// Cell the move committed to.
    pub to: Position,
    /// Seconds elapsed so far.
    pub elapsed: f32,
    /// Total transition duration in seconds.
    pub duration: f32,
}

impl MoveAnimation {
    /// Interpolation progress clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// An entity on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityInstance {
    /// Unique id, stable for the life of the instance.
    pub id: EntityId,

    /// Noun kind; fixed at placement.
    pub noun: NounKind,

    /// Current cell.
    pub position: Position,

    /// Index within the cell stack, front = 0. Renormalized whenever stack
    /// order changes; this is the canonical z order.
    pub layer: usize,

    /// Capabilities currently bound to this instance's noun kind.
    pub traits: TraitSet,

    /// In-flight visual transition, if any.
    #[serde(default)]
    pub animation: Option<MoveAnimation>,
}

impl EntityInstance {
    /// Create an instance with no capabilities bound.
    #[must_use]
    pub fn new(id: EntityId, noun: NounKind, position: Position, layer: usize) -> Self {
        Self {
            id,
            noun,
            position,
            layer,
            traits: TraitSet::empty(),
            animation: None,
        }
    }

    /// Whether the given capability is currently bound.
    #[must_use]
    pub fn carries(&self, kind: TraitKind) -> bool {
        self.traits.contains(kind)
    }

    /// Whether the instance sits on the floating layer.
    #[must_use]
    pub fn floats(&self) -> bool {
        self.carries(TraitKind::Float)
    }

    /// Start a visual transition from `from` to `to`.
    pub fn begin_move(&mut self, from: Position, to: Position, duration: f32) {
        self.animation = Some(MoveAnimation {
            from,
            to,
            elapsed: 0.0,
            duration,
        });
    }

    /// Whether the position is still animating.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance the transition by `dt` seconds.
    ///
    /// Returns `true` when the transition completes on this call.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(animation) = &mut self.animation else {
            return false;
        };

        animation.elapsed += dt;
        if animation.elapsed > animation.duration {
            self.animation = None;
            true
        } else {
            false
        }
    }
}
