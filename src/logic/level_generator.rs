// src/logic/level_generator.rs
//! レベル設定から盤面モデルを組み立てるよ！🏗️
//!
//! Cards are appended playfield first, then stock, in file order; a card's
//! id is its position in that order, which is also what `coveredBy` indices
//! refer to. Faces and suits left unset are drawn at random.

use std::path::Path;

use log::{debug, info};
use rand::Rng;

use crate::components::{CardId, CardOrigin, Rank, Suit};
use crate::config::{LevelCardConfig, LevelConfig};
use crate::error::LevelError;
use crate::logic::deck::{random_rank, random_suit, randomize_card};
use crate::model::GameModel;

/// Builds a model from a parsed level.
///
/// Fails when a `coveredBy` index does not name a card of the level, when a
/// card covers itself or is covered by a stock card, or when the covering
/// relation has a cycle.
pub fn generate<R: Rng + ?Sized>(level: &LevelConfig, rng: &mut R) -> Result<GameModel, LevelError> {
    validate_covering_graph(level)?;

    let mut model = GameModel::new();
    model.reset();

    for config in &level.playfield_cards {
        let id = model.add_card(config, CardOrigin::Playfield);
        assign_face_and_suit(&mut model, id, config, rng);
    }
    for config in &level.stock_cards {
        let id = model.add_card(config, CardOrigin::Stock);
        assign_face_and_suit(&mut model, id, config, rng);
    }

    model.rebuild_covering_relations();

    info!(
        "Generated level: {} playfield cards, {} stock cards",
        model.playfield_ids().len(),
        model.stock_len()
    );
    Ok(model)
}

pub fn generate_from_json<R: Rng + ?Sized>(json: &str, rng: &mut R) -> Result<GameModel, LevelError> {
    let level = LevelConfig::from_json_str(json)?;
    generate(&level, rng)
}

pub fn generate_from_file<R: Rng + ?Sized>(path: impl AsRef<Path>, rng: &mut R) -> Result<GameModel, LevelError> {
    let level = LevelConfig::load_from_file(path)?;
    generate(&level, rng)
}

fn assign_face_and_suit<R: Rng + ?Sized>(model: &mut GameModel, id: CardId, config: &LevelCardConfig, rng: &mut R) {
    match (config.card_face, config.card_suit) {
        (Some(face), Some(suit)) => model.set_face_and_suit(id, Rank::clamped(face), Suit::clamped(suit)),
        (Some(face), None) => model.set_face_and_suit(id, Rank::clamped(face), random_suit(rng)),
        (None, Some(suit)) => model.set_face_and_suit(id, random_rank(rng), Suit::clamped(suit)),
        (None, None) => randomize_card(model, id, rng),
    }
}

/// Checks that every `coveredBy` entry names another card of the level, that
/// no playfield card is covered by a stock card, and that the covering
/// relation is acyclic.
pub fn validate_covering_graph(level: &LevelConfig) -> Result<(), LevelError> {
    let total = level.total_cards();
    let playfield_len = level.playfield_cards.len();
    let all_cards = level.playfield_cards.iter().chain(level.stock_cards.iter());

    let mut edges: Vec<Vec<usize>> = Vec::with_capacity(total);
    for (card, config) in all_cards.enumerate() {
        let mut covers = Vec::with_capacity(config.covered_by.len());
        for &raw in &config.covered_by {
            let cover = usize::try_from(raw)
                .ok()
                .filter(|&c| c < total)
                .ok_or(LevelError::DanglingCover { card, cover: raw, total })?;
            if cover == card {
                return Err(LevelError::SelfCover { card });
            }
            // Stock cards never leave play, so they would cover forever.
            if card < playfield_len && cover >= playfield_len {
                return Err(LevelError::CoveredByStock { card, cover });
            }
            covers.push(cover);
        }
        edges.push(covers);
    }

    if let Some(card) = find_cycle(&edges) {
        return Err(LevelError::CoverCycle { card });
    }
    debug!("Covering graph of {} cards is acyclic", total);
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    New,
    Active,
    Done,
}

/// Iterative depth-first search; returns a card that lies on a cycle.
fn find_cycle(edges: &[Vec<usize>]) -> Option<usize> {
    let mut marks = vec![Mark::New; edges.len()];
    for start in 0..edges.len() {
        if marks[start] != Mark::New {
            continue;
        }
        marks[start] = Mark::Active;
        let mut stack = vec![(start, 0usize)];
        while let Some(top) = stack.last_mut() {
            let node = top.0;
            match edges[node].get(top.1) {
                Some(&next) => {
                    top.1 += 1;
                    match marks[next] {
                        Mark::Active => return Some(next),
                        Mark::New => {
                            marks[next] = Mark::Active;
                            stack.push((next, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }
    None
}
