//! 山札 (Stock) と手札置き場 (Tray) に関するルールを定義するよ。

use crate::model::GameModel;

/// ストック（山札）からカードを引けるかチェックする。
pub fn can_draw_from_stock(model: &GameModel) -> bool {
    model.stock_len() > 0
}

/// Playfield cards can only be matched once something is on the tray.
pub fn has_tray_card(model: &GameModel) -> bool {
    model.tray_card().is_some()
}
