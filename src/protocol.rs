// src/protocol.rs
//! 表示レイヤーとやり取りするメッセージの形式を定義するよ！💌
//!
//! The core never calls into rendering. After each intent it hands back
//! [`SessionEvent`]s describing what changed, and a [`GameStateData`]
//! snapshot can be taken at any time. Both serialize to JSON for the
//! JavaScript side.

use serde::{Deserialize, Serialize};

use crate::components::{Card, CardId, Position, Rank, Suit};
use crate::model::{GameModel, UndoMove};

/// Where a card currently is, from the presentation's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardZone {
    Playfield,
    Stock,
    Tray,
    /// Played or replaced; out of every zone.
    Discarded,
}

impl CardZone {
    pub fn of(model: &GameModel, id: CardId) -> Self {
        if model.tray() == Some(id) {
            CardZone::Tray
        } else if model.playfield_ids().contains(&id) {
            CardZone::Playfield
        } else if model.stock_ids().contains(&id) {
            CardZone::Stock
        } else {
            CardZone::Discarded
        }
    }
}

/// One card moving between zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMotion {
    pub card: CardId,
    pub from: CardZone,
    pub to: CardZone,
}

impl CardMotion {
    pub fn new(card: CardId, from: CardZone, to: CardZone) -> Self {
        Self { card, from, to }
    }
}

/// One card turning over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipData {
    pub card: CardId,
    pub face_up: bool,
}

/// The side effects of one move, for the renderer to animate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEffects {
    pub motions: Vec<CardMotion>,
    pub flips: Vec<FlipData>,
    pub tray: Option<CardId>,
    pub stock_count: usize,
}

impl MoveEffects {
    /// Fills in the tray and stock count from the model after the move.
    pub fn settled(mut self, model: &GameModel) -> Self {
        self.tray = model.tray();
        self.stock_count = model.stock_len();
        self
    }
}

/// A successful move: the record to undo it and what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub undo: UndoMove,
    pub effects: MoveEffects,
}

/// Notifications from the session to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SessionEvent {
    /// A new level was generated and dealt.
    #[serde(rename_all = "camelCase")]
    GameStarted { tray: Option<CardId>, stock_count: usize },
    MoveApplied { effects: MoveEffects },
    MoveUndone { effects: MoveEffects },
    /// The intent broke a rule; nothing changed.
    MoveRejected { reason: String },
    VictoryChanged { victory: bool },
}

/// One card as the presentation sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub position: Position,
    pub is_face_up: bool,
    pub is_removed: bool,
    pub is_exposed: bool,
    pub zone: CardZone,
}

impl CardData {
    fn from_card(model: &GameModel, card: &Card) -> Self {
        Self {
            id: card.id,
            rank: card.rank,
            suit: card.suit,
            position: card.position,
            is_face_up: card.is_face_up,
            is_removed: card.is_removed,
            is_exposed: model.is_exposed(card.id),
            zone: CardZone::of(model, card.id),
        }
    }
}

/// Full snapshot of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateData {
    pub cards: Vec<CardData>,
    pub playfield: Vec<CardId>,
    pub stock: Vec<CardId>,
    pub stock_count: usize,
    pub tray: Option<CardId>,
    pub victory: bool,
    pub can_undo: bool,
}

impl GameStateData {
    pub fn from_model(model: &GameModel, can_undo: bool) -> Self {
        Self {
            cards: model.cards().iter().map(|card| CardData::from_card(model, card)).collect(),
            playfield: model.playfield_ids().to_vec(),
            stock: model.stock_ids().to_vec(),
            stock_count: model.stock_len(),
            tray: model.tray(),
            victory: model.is_victory(),
            can_undo,
        }
    }
}
