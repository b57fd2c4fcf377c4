// src/components/position.rs

use serde::{Deserialize, Serialize};

/// レベルファイルに書かれたカードの配置座標だよ！📍
///
/// The rule engine never interprets it; it is carried through to the
/// presentation layer untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, alias = "X")]
    pub x: f32,
    #[serde(default, alias = "Y")]
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
