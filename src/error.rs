// src/error.rs
//! Error types: structural level failures and rule rejections.

use thiserror::Error;

use crate::components::CardId;

/// A level could not be turned into a playable model. The game does not start.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level file does not exist: {path}")]
    FileNotFound { path: String },

    #[error("failed to read level file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("level file is empty")]
    Empty,

    #[error("level file parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("card {card} is covered by unknown card index {cover} (level has {total} cards)")]
    DanglingCover { card: usize, cover: i64, total: usize },

    #[error("card {card} lists itself in coveredBy")]
    SelfCover { card: usize },

    #[error("card {card} is covered by stock card {cover} and could never be exposed")]
    CoveredByStock { card: usize, cover: usize },

    #[error("covering graph has a cycle through card {card}")]
    CoverCycle { card: usize },
}

/// A user intent that breaks a game rule. Nothing was changed.
///
/// The `Display` text is the reason shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("card {0} does not exist")]
    UnknownCard(CardId),

    #[error("card {0} has already been played")]
    AlreadyRemoved(CardId),

    #[error("card {0} is face down")]
    FaceDown(CardId),

    #[error("card {0} is not exposed")]
    NotExposed(CardId),

    #[error("draw from the stock first")]
    NoTrayCard,

    #[error("card does not match the tray")]
    NoMatch { card: CardId, tray: CardId },

    #[error("card {0} is not on the playfield")]
    NotInPlayfield(CardId),

    #[error("stock is empty")]
    StockEmpty,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("no level loaded")]
    NoGame,
}
