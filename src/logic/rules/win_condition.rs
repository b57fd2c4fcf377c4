//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::GameStatus;
use crate::model::GameModel;

/// ゲームのクリア条件（場札が全部なくなったか）を判定する。
pub fn check_win_condition(model: &GameModel) -> GameStatus {
    GameStatus::from_victory(model.is_victory())
}
