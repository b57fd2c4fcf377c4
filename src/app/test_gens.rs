// Proptest generators for levels and player intents.
// Covers only point at earlier cards, so every generated level is acyclic.

use proptest::prelude::*;

use crate::components::CardId;
use crate::config::{LevelCardConfig, LevelConfig};

#[derive(Debug, Clone, Copy)]
pub enum Intent {
    Card(CardId),
    Stock,
    Undo,
}

fn playfield_card() -> impl Strategy<Value = (i64, i64, bool, Vec<prop::sample::Index>)> {
    (0i64..13, 0i64..4, any::<bool>(), prop::collection::vec(any::<prop::sample::Index>(), 0..3))
}

/// A level with 1..10 playfield cards and up to 8 stock cards.
pub fn level() -> impl Strategy<Value = LevelConfig> {
    let playfield = prop::collection::vec(playfield_card(), 1..10);
    let stock = prop::collection::vec((0i64..13, 0i64..4), 0..8);
    (playfield, stock).prop_map(|(playfield, stock)| {
        let playfield_cards = playfield
            .into_iter()
            .enumerate()
            .map(|(i, (face, suit, face_up, covers))| {
                let mut covered_by: Vec<i64> = if i == 0 {
                    Vec::new()
                } else {
                    covers.iter().map(|index| index.index(i) as i64).collect()
                };
                covered_by.sort_unstable();
                covered_by.dedup();
                LevelCardConfig { card_face: Some(face), card_suit: Some(suit), face_up, covered_by, ..LevelCardConfig::default() }
            })
            .collect();
        let stock_cards = stock
            .into_iter()
            .map(|(face, suit)| LevelCardConfig { card_face: Some(face), card_suit: Some(suit), ..LevelCardConfig::default() })
            .collect();
        LevelConfig::new(playfield_cards, stock_cards)
    })
}

/// Taps on arbitrary ids (some out of range) mixed with stock taps.
pub fn intents(max: usize) -> impl Strategy<Value = Vec<Intent>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0usize..20).prop_map(|id| Intent::Card(CardId(id))),
            1 => Just(Intent::Stock),
        ],
        0..max,
    )
}

/// Like [`intents`], with undo taps mixed in.
pub fn intents_with_undo(max: usize) -> impl Strategy<Value = Vec<Intent>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0usize..20).prop_map(|id| Intent::Card(CardId(id))),
            1 => Just(Intent::Stock),
            1 => Just(Intent::Undo),
        ],
        0..max,
    )
}
