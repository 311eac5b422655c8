use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{PitId, Row, Side, Turn};

/// Reasons a pit selection is refused by the turn engine.
///
/// These are expected during normal play (imprecise clicks, clicks during
/// the opponent's turn), so they are reported in a `MoveResult` rather than
/// raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum IllegalMove {
    #[error("the game is already over")]
    GameOver,

    #[error("{side} cannot move: turn is {turn}")]
    NotYourTurn { side: Side, turn: Turn },

    #[error("{pit} is not on {side}'s row ({expected:?})")]
    WrongRow { pit: PitId, side: Side, expected: Row },

    #[error("{0} is empty")]
    EmptyPit(PitId),
}

/// A deserialized pit or board that no game could reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPosition {
    #[error("pit column must be in 0..6, got {0}")]
    PitColumn(u8),

    #[error("board must hold exactly 48 stones, got {0}")]
    StoneTotal(u32),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}
