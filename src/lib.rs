//! # rulegrid
//!
//! A grid puzzle engine where the rules of the world are entities on the
//! board. Spatial `[subject] is [trait]` arrangements are re-read after
//! every move and turned into live capability bindings: every instance of
//! the named noun kind gains or loses the named behavior.
//!
//! ## Design Principles
//!
//! 1. **Rules are derived, never authored**: the rule set is recomputed from
//!    board layout each turn and diffed into the minimum capability change.
//!
//! 2. **Deterministic resolution**: movers act in row-major scan order,
//!    traits dispatch in a fixed interaction order, and stack settlement is
//!    a bounded fixed-point loop. The same inputs always produce the same
//!    board.
//!
//! 3. **The core never calls out**: terminal signals, audio cues and redraw
//!    hints are plain data drained from each turn's report. Rendering,
//!    audio and input live entirely outside the crate.
//!
//! ## Modules
//!
//! - `core`: entity ids and instances, noun kinds, geometry, configuration
//! - `board`: the grid of per-cell ordered stacks, plus the level loader
//! - `rules`: rule extraction and capability rebinding
//! - `traits`: capability kinds, the per-instance capability set, dispatch
//! - `resolve`: turn orchestration and the stack convergence loop
//! - `events`: engine-produced events and the per-turn report
//! - `autotile`: neighbor-mask to tile-variant lookup for external renderers
//! - `engine`: the facade tying one playthrough together

pub mod autotile;
pub mod board;
pub mod core;
pub mod engine;
pub mod events;
pub mod resolve;
pub mod rules;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    Direction, EngineConfig, EntityId, EntityInstance, MoveAnimation, NounKind, Position,
};

pub use crate::board::{loader, Board, LevelError};

pub use crate::rules::{BehaviorBinder, Rule, RuleExtractor, RuleSet};

pub use crate::traits::{EnterOutcome, StackOutcome, TraitDispatcher, TraitKind, TraitSet};

pub use crate::resolve::{MoveResolver, StackConvergence};

pub use crate::events::{EngineEvent, SoundCue, TurnReport};

pub use crate::engine::Engine;

pub use crate::autotile::{tile_variant, TileCoord};
