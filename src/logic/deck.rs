// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::components::CardId;
use crate::model::GameModel;

/// ランダムなランクを1つ選ぶよ！(13種類から一様に)
pub fn random_rank<R: Rng + ?Sized>(rng: &mut R) -> Rank {
    *ALL_RANKS.choose(rng).unwrap_or(&Rank::Ace)
}

/// ランダムなスートを1つ選ぶよ！(4種類から一様に)
pub fn random_suit<R: Rng + ?Sized>(rng: &mut R) -> Suit {
    *ALL_SUITS.choose(rng).unwrap_or(&Suit::Club)
}

/// Gives a card a fresh random face and suit.
pub fn randomize_card<R: Rng + ?Sized>(model: &mut GameModel, id: CardId, rng: &mut R) {
    if model.card(id).is_none() {
        return;
    }
    let rank = random_rank(rng);
    let suit = random_suit(rng);
    model.set_face_and_suit(id, rank, suit);
}
