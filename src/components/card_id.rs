// src/components/card_id.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// カード1枚1枚を識別するただのIDだよ！
///
/// Ids are handed out in generation order starting at 0 and double as the
/// card's slot in the model's arena, so a lookup is a plain index.
/// They are never reused within a game.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub usize);

impl CardId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for CardId {
    fn from(value: usize) -> Self {
        CardId(value)
    }
}
