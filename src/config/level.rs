// src/config/level.rs
//! レベルファイル (JSON) の形式と読み込み処理だよ！
//!
//! A level is two ordered card lists: the playfield and the stock. Every card
//! may leave its face or suit unset to have it drawn at random when the game
//! is generated. Optional fields are parsed leniently: a value of the wrong
//! type is treated as if it were absent.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::components::{Position, Rank, Suit};
use crate::error::LevelError;

/// One card entry of a level file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelCardConfig {
    /// 0..=12 maps to A..K; `None` means random.
    #[serde(default, alias = "CardFace", deserialize_with = "lenient_index")]
    pub card_face: Option<i64>,
    /// 0..=3 maps to Club, Diamond, Heart, Spade; `None` means random.
    #[serde(default, alias = "CardSuit", deserialize_with = "lenient_index")]
    pub card_suit: Option<i64>,
    #[serde(default, alias = "Position", deserialize_with = "lenient_position")]
    pub position: Position,
    #[serde(default, alias = "FaceUp", deserialize_with = "lenient_bool")]
    pub face_up: bool,
    /// Indices (in generation order) of the cards covering this one.
    #[serde(default, alias = "CoveredBy", deserialize_with = "lenient_indices")]
    pub covered_by: Vec<i64>,
}

impl LevelCardConfig {
    /// A card with both face and suit fixed.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            card_face: Some(rank.index() as i64),
            card_suit: Some(suit.index() as i64),
            ..Self::default()
        }
    }

    /// A card whose face and suit are both drawn at random.
    pub fn random() -> Self {
        Self::default()
    }

    pub fn face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    pub fn covered_by(mut self, indices: &[usize]) -> Self {
        self.covered_by = indices.iter().map(|&i| i as i64).collect();
        self
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }
}

/// A whole level: playfield cards first, then the stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    #[serde(alias = "PlayfieldCards", deserialize_with = "object_entries")]
    pub playfield_cards: Vec<LevelCardConfig>,
    /// The last entry ends up on top of the stock.
    #[serde(
        default,
        rename = "stackCards",
        alias = "stockCards",
        alias = "StackCards",
        alias = "StockCards",
        deserialize_with = "object_entries"
    )]
    pub stock_cards: Vec<LevelCardConfig>,
}

impl LevelConfig {
    pub fn new(playfield_cards: Vec<LevelCardConfig>, stock_cards: Vec<LevelCardConfig>) -> Self {
        Self { playfield_cards, stock_cards }
    }

    pub fn total_cards(&self) -> usize {
        self.playfield_cards.len() + self.stock_cards.len()
    }

    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        if json.trim().is_empty() {
            return Err(LevelError::Empty);
        }
        let level: LevelConfig = serde_json::from_str(json)?;
        debug!(
            "Parsed level: {} playfield cards, {} stock cards",
            level.playfield_cards.len(),
            level.stock_cards.len()
        );
        Ok(level)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(LevelError::FileNotFound { path: display });
        }
        info!("Loading level from {}", display);
        let text = fs::read_to_string(path).map_err(|source| LevelError::Io { path: display, source })?;
        Self::from_json_str(&text)
    }
}

// --- lenient field parsers ---

fn lenient_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().filter(|v| *v >= 0))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

fn lenient_position<'de, D>(deserializer: D) -> Result<Position, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Some(object) = value.as_object() else {
        return Ok(Position::default());
    };
    let coord = |lower: &str, upper: &str| {
        object
            .get(lower)
            .or_else(|| object.get(upper))
            .and_then(Value::as_f64)
            .unwrap_or(0.0) as f32
    };
    Ok(Position::new(coord("x", "X"), coord("y", "Y")))
}

fn lenient_indices<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default())
}

/// Card arrays must hold JSON objects only.
fn object_entries<'de, D>(deserializer: D) -> Result<Vec<LevelCardConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Value> = Vec::deserialize(deserializer)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Value::Object(map) => card_from_object(map).map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "card entry {} is not an object: {}",
                i, other
            ))),
        })
        .collect()
}

fn card_from_object(map: Map<String, Value>) -> Result<LevelCardConfig, serde_json::Error> {
    serde_json::from_value(Value::Object(map))
}
