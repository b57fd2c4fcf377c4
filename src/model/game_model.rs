// src/model/game_model.rs

use serde::{Deserialize, Serialize};

use crate::components::{Card, CardId, CardOrigin, Position, Rank, Suit};
use crate::config::LevelCardConfig;

/// ゲーム盤面の全状態を持つモデルだよ！
///
/// Cards live in an arena indexed by [`CardId`]; the covering graph is stored
/// on the cards as id lists. Besides the arena the model tracks three zones:
///
/// - the playfield sequence (cards still in play, generation order),
/// - the stock stack (last element is drawn next),
/// - the tray slot (the single active card, or nothing).
///
/// Every operation is a small direct mutation with no cascade; the
/// controllers compose them into moves. Unknown ids are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameModel {
    cards: Vec<Card>,
    playfield: Vec<CardId>,
    stock: Vec<CardId>,
    tray: Option<CardId>,
}

impl GameModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        self.playfield.clear();
        self.stock.clear();
        self.tray = None;
    }

    // --- lookup ---

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn playfield_ids(&self) -> &[CardId] {
        &self.playfield
    }

    pub fn stock_ids(&self) -> &[CardId] {
        &self.stock
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn tray(&self) -> Option<CardId> {
        self.tray
    }

    pub fn tray_card(&self) -> Option<&Card> {
        self.tray.and_then(|id| self.card(id))
    }

    pub fn playfield_index(&self, id: CardId) -> Option<usize> {
        self.playfield.iter().position(|&pid| pid == id)
    }

    // --- generation ---

    /// Appends a card built from a level entry and returns its id.
    ///
    /// Face and suit are taken from the entry when present (clamped), and
    /// default to Ace of Clubs otherwise; the generator overwrites them for
    /// randomized entries. Ids are the arena slot, so they count up from 0.
    pub fn add_card(&mut self, config: &LevelCardConfig, origin: CardOrigin) -> CardId {
        let id = CardId(self.cards.len());
        let card = Card {
            id,
            rank: config.card_face.map_or(Rank::Ace, Rank::clamped),
            suit: config.card_suit.map_or(Suit::Club, Suit::clamped),
            position: config.position,
            is_face_up: config.face_up,
            is_removed: false,
            origin,
            covered_by: config
                .covered_by
                .iter()
                .filter_map(|&i| usize::try_from(i).ok())
                .map(CardId)
                .collect(),
            covering: Vec::new(),
        };
        self.cards.push(card);
        match origin {
            CardOrigin::Playfield => self.playfield.push(id),
            CardOrigin::Stock => self.stock.push(id),
        }
        id
    }

    pub fn set_face_and_suit(&mut self, id: CardId, rank: Rank, suit: Suit) {
        if let Some(card) = self.card_mut(id) {
            card.rank = rank;
            card.suit = suit;
        }
    }

    pub fn set_position(&mut self, id: CardId, position: Position) {
        if let Some(card) = self.card_mut(id) {
            card.position = position;
        }
    }

    /// Recomputes every card's `covering` list from the `covered_by` lists.
    pub fn rebuild_covering_relations(&mut self) {
        for card in &mut self.cards {
            card.covering.clear();
        }
        let edges: Vec<(CardId, CardId)> = self
            .cards
            .iter()
            .flat_map(|card| card.covered_by.iter().map(move |&cover| (cover, card.id)))
            .collect();
        for (cover, covered) in edges {
            if let Some(cover_card) = self.card_mut(cover) {
                cover_card.covering.push(covered);
            }
        }
    }

    // --- queries ---

    /// A card is exposed when it is still in play and nothing covering it is.
    pub fn is_exposed(&self, id: CardId) -> bool {
        let Some(card) = self.card(id) else {
            return false;
        };
        if card.is_removed {
            return false;
        }
        card.covered_by
            .iter()
            .all(|&cover| self.card(cover).map_or(true, |c| c.is_removed))
    }

    /// Unknown ids count as removed.
    pub fn is_removed(&self, id: CardId) -> bool {
        self.card(id).map_or(true, |card| card.is_removed)
    }

    pub fn is_victory(&self) -> bool {
        self.playfield.is_empty()
    }

    // --- mutations ---

    pub fn set_face_up(&mut self, id: CardId, face_up: bool) {
        if let Some(card) = self.card_mut(id) {
            card.is_face_up = face_up;
        }
    }

    pub fn set_removed(&mut self, id: CardId, removed: bool) {
        if let Some(card) = self.card_mut(id) {
            card.is_removed = removed;
        }
    }

    pub fn remove_from_playfield(&mut self, id: CardId) {
        self.set_removed(id, true);
        if let Some(index) = self.playfield_index(id) {
            self.playfield.remove(index);
        }
    }

    /// Puts a card back into the playfield sequence. Out-of-range indices
    /// append.
    pub fn restore_to_playfield(&mut self, id: CardId, index: usize) {
        self.set_removed(id, false);
        let index = index.min(self.playfield.len());
        self.playfield.insert(index, id);
    }

    pub fn draw_from_stock(&mut self) -> Option<CardId> {
        self.stock.pop()
    }

    pub fn return_to_stock(&mut self, id: CardId) {
        self.stock.push(id);
    }

    /// Removes the topmost occurrence of `id` from the stock.
    pub fn remove_from_stock(&mut self, id: CardId) -> bool {
        match self.stock.iter().rposition(|&sid| sid == id) {
            Some(index) => {
                self.stock.remove(index);
                true
            }
            None => false,
        }
    }

    /// Installs a new tray card and returns the one it replaced.
    pub fn replace_tray(&mut self, id: CardId) -> Option<CardId> {
        self.tray.replace(id)
    }

    pub fn set_tray(&mut self, id: Option<CardId>) {
        self.tray = id;
    }
}
