// src/model/mod.rs
//! 盤面モデルと、手を戻すための記録。

pub mod game_model;
pub mod undo_move;

pub use game_model::GameModel;
pub use undo_move::{CardFlip, DrawRecord, MatchRecord, UndoMove};
