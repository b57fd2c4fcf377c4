// src/components/card.rs

use serde::{Deserialize, Serialize};

use crate::components::card_id::CardId;
use crate::components::position::Position;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// The discriminants are the suit indices used by level files (0..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// Ranks are cyclic for matching purposes: King and Ace are neighbours.
/// The discriminants are the face indices used by level files (0..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Face index in `0..=12`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rank for a face index, wrapping modulo 13.
    pub fn from_index_wrapping(index: usize) -> Self {
        ALL_RANKS[index % ALL_RANKS.len()]
    }

    /// Rank for a level-file face value, clamped into `0..=12`.
    pub fn clamped(value: i64) -> Self {
        ALL_RANKS[value.clamp(0, 12) as usize]
    }
}

impl Suit {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Suit for a level-file suit value, clamped into `0..=3`.
    pub fn clamped(value: i64) -> Self {
        ALL_SUITS[value.clamp(0, 3) as usize]
    }
}

/// Which group a card was generated into. Never changes after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardOrigin {
    Playfield,
    Stock,
}

/// カードそのものを表すデータだよ！🃏
///
/// Cards only refer to each other through [`CardId`]s; the owning
/// [`GameModel`](crate::model::GameModel) resolves them.
///
/// - `covered_by`: cards that block this one (from the level file)
/// - `covering`: cards this one blocks (derived when the model is built)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub position: Position,
    pub is_face_up: bool,
    pub is_removed: bool,
    pub origin: CardOrigin,
    pub covered_by: Vec<CardId>,
    pub covering: Vec<CardId>,
}

impl Card {
    pub fn in_playfield(&self) -> bool {
        self.origin == CardOrigin::Playfield
    }
}
