// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！
///
/// There is no losing state: a stuck game simply stays `Playing`, and
/// undoing out of a win goes back to `Playing` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 (playfield is empty)
    Won,
}

impl GameStatus {
    pub fn from_victory(is_victory: bool) -> Self {
        if is_victory {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}
