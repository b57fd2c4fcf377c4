// src/model/undo_move.rs

use serde::{Deserialize, Serialize};

use crate::components::CardId;

/// A card that a move turned face up as a side effect, with the flag it had
/// before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFlip {
    pub card: CardId,
    pub previous_face_up: bool,
}

/// A playfield card replaced the tray card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub moved: CardId,
    /// Evicted to the top of the stock by the move.
    pub previous_tray: Option<CardId>,
    pub previous_playfield_index: usize,
    /// Cards revealed by the move, in the order they were flipped.
    pub flips: Vec<CardFlip>,
}

/// The top stock card replaced the tray card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub drawn: CardId,
    /// Dropped from play by the move.
    pub previous_tray: Option<CardId>,
    pub previous_stock_index: usize,
    pub previous_face_up: bool,
}

/// Everything needed to reverse one move exactly.
///
/// 2種類しかないので enum で表すよ！ The session dispatches on the variant to
/// the controller that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UndoMove {
    PlayfieldMatch(MatchRecord),
    StockDraw(DrawRecord),
}

impl UndoMove {
    /// The card that ended up on the tray.
    pub fn moved_card(&self) -> CardId {
        match self {
            UndoMove::PlayfieldMatch(record) => record.moved,
            UndoMove::StockDraw(record) => record.drawn,
        }
    }

    pub fn previous_tray(&self) -> Option<CardId> {
        match self {
            UndoMove::PlayfieldMatch(record) => record.previous_tray,
            UndoMove::StockDraw(record) => record.previous_tray,
        }
    }
}

impl From<MatchRecord> for UndoMove {
    fn from(record: MatchRecord) -> Self {
        UndoMove::PlayfieldMatch(record)
    }
}

impl From<DrawRecord> for UndoMove {
    fn from(record: DrawRecord) -> Self {
        UndoMove::StockDraw(record)
    }
}
