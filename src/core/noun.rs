//! Noun kinds.
//!
//! Every entity on the board has a kind drawn from a closed enumeration whose
//! discriminants match the level wire format. Kinds split into decoration
//! blocks, the rule connector, regular nouns, subject tokens, and trait
//! tokens. Subject and trait tokens are the text a rule is spelled with; the
//! regular nouns are what rules bind behavior to.

use serde::{Deserialize, Serialize};

use crate::traits::TraitKind;

/// Entity kind, with discriminants matching the level byte format.
///
/// Id 0 encodes an empty cell in level data and has no kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NounKind {
    // decoration blocks
    DecorationBush = 1,
    DecorationTile,
    DecorationUnknown,

    // the "is" connector in `[subject] is [trait]` rules
    ConnectorIs,

    // regular entities
    Player,
    Rock,
    Water,
    Wall,
    Flag,
    Skull,
    Cloud,

    // subjects in `[subject] is [trait]` rules
    SubjectPlayer,
    SubjectRock,
    SubjectWater,
    SubjectWall,
    SubjectFlag,
    SubjectSkull,
    SubjectCloud,

    // traits in `[subject] is [trait]` rules
    TraitYou,
    TraitPush,
    TraitSink,
    TraitStop,
    TraitWin,
    TraitLose,
    TraitFloat,
}

impl NounKind {
    /// Decode a level wire id.
    ///
    /// Returns `None` for ids outside the enumeration (0 included).
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            1 => NounKind::DecorationBush,
            2 => NounKind::DecorationTile,
            3 => NounKind::DecorationUnknown,
            4 => NounKind::ConnectorIs,
            5 => NounKind::Player,
            6 => NounKind::Rock,
            7 => NounKind::Water,
            8 => NounKind::Wall,
            9 => NounKind::Flag,
            10 => NounKind::Skull,
            11 => NounKind::Cloud,
            12 => NounKind::SubjectPlayer,
            13 => NounKind::SubjectRock,
            14 => NounKind::SubjectWater,
            15 => NounKind::SubjectWall,
            16 => NounKind::SubjectFlag,
            17 => NounKind::SubjectSkull,
            18 => NounKind::SubjectCloud,
            19 => NounKind::TraitYou,
            20 => NounKind::TraitPush,
            21 => NounKind::TraitSink,
            22 => NounKind::TraitStop,
            23 => NounKind::TraitWin,
            24 => NounKind::TraitLose,
            25 => NounKind::TraitFloat,
            _ => return None,
        })
    }

    /// The level wire id for this kind.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// The regular noun a subject token names, if this is a subject token.
    #[must_use]
    pub const fn subject_target(self) -> Option<NounKind> {
        Some(match self {
            NounKind::SubjectPlayer => NounKind::Player,
            NounKind::SubjectRock => NounKind::Rock,
            NounKind::SubjectWater => NounKind::Water,
            NounKind::SubjectWall => NounKind::Wall,
            NounKind::SubjectFlag => NounKind::Flag,
            NounKind::SubjectSkull => NounKind::Skull,
            NounKind::SubjectCloud => NounKind::Cloud,
            _ => return None,
        })
    }

    /// Whether this kind is a subject token.
    #[must_use]
    pub const fn is_subject_token(self) -> bool {
        self.subject_target().is_some()
    }

    /// The capability a trait token names, if this is a trait token.
    #[must_use]
    pub const fn trait_kind(self) -> Option<TraitKind> {
        Some(match self {
            NounKind::TraitYou => TraitKind::You,
            NounKind::TraitPush => TraitKind::Push,
            NounKind::TraitSink => TraitKind::Sink,
            NounKind::TraitStop => TraitKind::Stop,
            NounKind::TraitWin => TraitKind::Win,
            NounKind::TraitLose => TraitKind::Lose,
            NounKind::TraitFloat => TraitKind::Float,
            _ => return None,
        })
    }

    /// Whether this kind is a trait token.
    #[must_use]
    pub const fn is_trait_token(self) -> bool {
        self.trait_kind().is_some()
    }

    /// Text kinds: subject tokens, trait tokens and the connector.
    ///
    /// Text is always pushable so rules can be rearranged.
    #[must_use]
    pub const fn is_text(self) -> bool {
        self.is_subject_token() || self.is_trait_token() || matches!(self, NounKind::ConnectorIs)
    }
}
