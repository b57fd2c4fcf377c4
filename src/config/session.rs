// src/config/session.rs
//! セッションの設定だよ！

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Options for starting a game session. Every field has a default, so `{}`
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Seed for face/suit randomization. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Put the top stock card on the tray when a game starts.
    pub draw_initial_card: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: None, draw_initial_card: true }
    }
}

impl SessionConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
