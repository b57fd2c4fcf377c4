//! 場札 (Playfield) に関する読み取り専用の問い合わせだよ。ヒント表示とかに使う！
//!
//! Only "live" cards count: still in play, face up and exposed.

use itertools::Itertools;

use crate::components::{Card, CardId, Rank};
use crate::model::GameModel;

use super::common::can_match;

fn live_playfield_cards(model: &GameModel) -> impl Iterator<Item = &Card> + '_ {
    model
        .playfield_ids()
        .iter()
        .filter_map(|&id| model.card(id))
        .filter(|card| !card.is_removed && card.is_face_up)
        .filter(|card| model.is_exposed(card.id))
}

/// Distinct ranks of the live playfield cards, ascending.
pub fn matchable_faces_in_playfield(model: &GameModel) -> Vec<Rank> {
    live_playfield_cards(model).map(|card| card.rank).unique().sorted().collect()
}

/// How many live playfield cards have the given rank.
pub fn count_face_in_playfield(model: &GameModel, rank: Rank) -> usize {
    live_playfield_cards(model).filter(|card| card.rank == rank).count()
}

/// Whether any live playfield card could be played on a card of `rank`.
pub fn has_matchable_card_in_playfield(model: &GameModel, rank: Rank) -> bool {
    live_playfield_cards(model).any(|card| can_match(card.rank, rank))
}

/// Live playfield cards that can go on the current tray card, in playfield
/// order. Empty when the tray is empty.
pub fn playable_cards(model: &GameModel) -> Vec<CardId> {
    let Some(tray) = model.tray_card() else {
        return Vec::new();
    };
    let tray_rank = tray.rank;
    live_playfield_cards(model)
        .filter(|card| can_match(card.rank, tray_rank))
        .map(|card| card.id)
        .collect()
}
