// src/app/stock_handler.rs
//! Handles taps on the stock pile: the top card goes face up onto the tray.

use log::{debug, info, warn};

use crate::components::CardId;
use crate::error::MoveRejection;
use crate::logic::rules::can_draw_from_stock;
use crate::model::{DrawRecord, GameModel};
use crate::protocol::{CardMotion, CardZone, MoveEffects, MoveOutcome};

/// Draws the top stock card onto the tray.
///
/// The card it replaces leaves play; unlike a playfield match it does not go
/// back to the stock.
pub fn handle_stock_tap(model: &mut GameModel) -> Result<MoveOutcome, MoveRejection> {
    info!("Stock tapped ({} cards left)", model.stock_len());
    if !can_draw_from_stock(model) {
        info!("  Stock is empty. Cannot draw.");
        return Err(MoveRejection::StockEmpty);
    }

    let previous_stock_index = model.stock_len() - 1;
    let Some(drawn) = model.draw_from_stock() else {
        warn!("  Stock reported cards but nothing could be drawn.");
        return Err(MoveRejection::StockEmpty);
    };
    let previous_face_up = model.card(drawn).map_or(false, |card| card.is_face_up);
    model.set_face_up(drawn, true);
    let previous_tray = model.replace_tray(drawn);

    let mut effects = MoveEffects::default();
    effects.motions.push(CardMotion::new(drawn, CardZone::Stock, CardZone::Tray));
    if let Some(old) = previous_tray {
        debug!("  {} leaves the tray", old);
        effects.motions.push(CardMotion::new(old, CardZone::Tray, CardZone::Discarded));
    }

    info!("  {} drawn to tray.", drawn);
    let record = DrawRecord { drawn, previous_tray, previous_stock_index, previous_face_up };
    Ok(MoveOutcome { undo: record.into(), effects: effects.settled(model) })
}

/// Reverses a stock draw. The card goes back on top of the stock, which is
/// where it was drawn from.
pub fn undo_draw(model: &mut GameModel, record: &DrawRecord) -> MoveEffects {
    info!("Undoing draw of {}", record.drawn);
    model.set_tray(record.previous_tray);
    model.set_face_up(record.drawn, record.previous_face_up);
    model.return_to_stock(record.drawn);
    debug!(
        "  {} back at stock index {} of {}",
        record.drawn,
        record.previous_stock_index,
        model.stock_len()
    );

    let mut effects = MoveEffects::default();
    effects.motions.push(CardMotion::new(record.drawn, CardZone::Tray, CardZone::Stock));
    if let Some(old) = record.previous_tray {
        effects.motions.push(CardMotion::new(old, CardZone::Discarded, CardZone::Tray));
    }
    effects.settled(model)
}

/// Puts the first card on the tray when a game starts. This is part of
/// dealing, not a move, so it leaves no undo record.
pub fn draw_initial_card(model: &mut GameModel) -> Option<CardId> {
    let drawn = model.draw_from_stock()?;
    model.set_face_up(drawn, true);
    model.set_tray(Some(drawn));
    info!("Initial tray card: {}", drawn);
    Some(drawn)
}
