// src/lib.rs
//! Tripeaks ソリティアのルールエンジンだよ！🃏
//!
//! Cards sit in a covering graph on the playfield; an exposed card can go on
//! the tray when its rank is one above or below the tray card (King and Ace
//! are neighbours). The stock refills the tray, every move can be undone,
//! and the game is won once the playfield is empty.
//!
//! The core is plain Rust and synchronous. [`app::GameApp`] wraps it for
//! JavaScript through `wasm-bindgen`.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod logic;
pub mod model;
pub mod protocol;

pub use app::{GameApp, GameSession, UndoManager};
pub use components::{Card, CardId, CardOrigin, GameStatus, Position, Rank, Suit};
pub use config::{LevelCardConfig, LevelConfig, SessionConfig};
pub use error::{LevelError, MoveRejection};
pub use model::{GameModel, UndoMove};
pub use protocol::{GameStateData, MoveEffects, SessionEvent};

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("Panic hook and logger set!");
}
