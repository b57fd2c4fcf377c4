// src/app/game_app.rs
//! JavaScript から使うための窓口だよ！🪟
//!
//! Every method returns JSON text so the page can animate whatever it likes.
//! Load failures become `js_sys::Error`s; rule rejections are ordinary
//! `moveRejected` events.

use js_sys::Error;
use log::{error, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::app::session::GameSession;
use crate::components::CardId;
use crate::config::SessionConfig;
use crate::logic::rules::playable_cards;

#[wasm_bindgen]
pub struct GameApp {
    session: GameSession,
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: Initializing...");
        Self { session: GameSession::new() }
    }

    /// Deals a level. `config_json` is an optional `SessionConfig` such as
    /// `{"seed": 42}`. Returns the start events as a JSON array.
    pub fn load_level_json(&mut self, level_json: &str, config_json: Option<String>) -> Result<String, JsValue> {
        let config = match config_json.as_deref() {
            Some(text) if !text.trim().is_empty() => serde_json::from_str::<SessionConfig>(text)
                .map_err(|e| js_error(&format!("Invalid session config: {}", e)))?,
            _ => SessionConfig::default(),
        };
        let events = self.session.start_from_json(level_json, &config).map_err(|e| {
            error!("Failed to load level: {}", e);
            js_error(&e.to_string())
        })?;
        to_json(&events)
    }

    pub fn tap_card(&mut self, card_id: usize) -> Result<String, JsValue> {
        let events = self.session.card_tapped(CardId(card_id));
        to_json(&events)
    }

    pub fn tap_stock(&mut self) -> Result<String, JsValue> {
        let events = self.session.stock_tapped();
        to_json(&events)
    }

    pub fn tap_undo(&mut self) -> Result<String, JsValue> {
        let events = self.session.undo_tapped();
        to_json(&events)
    }

    /// The full `GameStateData` snapshot.
    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.snapshot())
    }

    /// Ids of the playfield cards that can go on the tray right now.
    pub fn hint_json(&self) -> Result<String, JsValue> {
        to_json(&playable_cards(self.session.model()))
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn is_victory(&self) -> bool {
        self.session.status().is_won()
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(&format!("Failed to serialize: {}", e)))
}

fn js_error(message: &str) -> JsValue {
    JsValue::from(Error::new(message))
}
