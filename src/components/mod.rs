// src/components/mod.rs

pub mod card;
pub mod card_id;
pub mod game_state;
pub mod position;

pub use card::{Card, CardOrigin, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use card_id::CardId;
pub use game_state::GameStatus;
pub use position::Position;
