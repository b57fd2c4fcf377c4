// src/app/playfield_handler.rs
//! 場札をタップした時の処理だよ！ Tray に重ねて、下のカードをめくる。

use log::{debug, info};

use crate::components::CardId;
use crate::error::MoveRejection;
use crate::logic::rules::can_match;
use crate::model::{CardFlip, GameModel, MatchRecord};
use crate::protocol::{CardMotion, CardZone, FlipData, MoveEffects, MoveOutcome};

/// Plays an exposed playfield card onto the tray.
///
/// All checks happen before the first mutation, so a rejection leaves the
/// model exactly as it was. On success the old tray card goes to the top of
/// the stock and every card the played card was covering that is now exposed
/// and face down gets turned face up.
pub fn handle_card_tap(model: &mut GameModel, id: CardId) -> Result<MoveOutcome, MoveRejection> {
    info!("Card tapped: {}", id);
    let index = check_playable(model, id)?;

    let mut effects = MoveEffects::default();

    let previous_tray = model.replace_tray(id);
    if let Some(evicted) = previous_tray {
        model.return_to_stock(evicted);
        effects.motions.push(CardMotion::new(evicted, CardZone::Tray, CardZone::Stock));
    }

    model.remove_from_playfield(id);
    effects.motions.push(CardMotion::new(id, CardZone::Playfield, CardZone::Tray));

    let covering = model.card(id).map(|card| card.covering.clone()).unwrap_or_default();
    let mut flips = Vec::new();
    for covered in covering {
        let Some(card) = model.card(covered) else { continue };
        if card.is_removed || card.is_face_up || !model.is_exposed(covered) {
            continue;
        }
        debug!("  Revealing {}", covered);
        model.set_face_up(covered, true);
        flips.push(CardFlip { card: covered, previous_face_up: false });
        effects.flips.push(FlipData { card: covered, face_up: true });
    }

    let record = MatchRecord { moved: id, previous_tray, previous_playfield_index: index, flips };
    info!("  {} moved to tray ({} revealed)", id, record.flips.len());
    Ok(MoveOutcome { undo: record.into(), effects: effects.settled(model) })
}

/// Returns the card's playfield index when it may be played.
fn check_playable(model: &GameModel, id: CardId) -> Result<usize, MoveRejection> {
    let card = model.card(id).ok_or(MoveRejection::UnknownCard(id))?;
    if card.is_removed {
        return Err(MoveRejection::AlreadyRemoved(id));
    }
    if !card.is_face_up {
        return Err(MoveRejection::FaceDown(id));
    }
    if !model.is_exposed(id) {
        return Err(MoveRejection::NotExposed(id));
    }
    let tray = model.tray_card().ok_or(MoveRejection::NoTrayCard)?;
    if !can_match(card.rank, tray.rank) {
        return Err(MoveRejection::NoMatch { card: id, tray: tray.id });
    }
    model.playfield_index(id).ok_or(MoveRejection::NotInPlayfield(id))
}

/// Reverses a playfield match.
pub fn undo_match(model: &mut GameModel, record: &MatchRecord) -> MoveEffects {
    info!("Undoing match of {}", record.moved);
    let mut effects = MoveEffects::default();

    model.restore_to_playfield(record.moved, record.previous_playfield_index);
    model.set_face_up(record.moved, true);
    effects.motions.push(CardMotion::new(record.moved, CardZone::Tray, CardZone::Playfield));

    if let Some(evicted) = record.previous_tray {
        // The match pushed it on top, so the topmost occurrence is the one.
        if model.remove_from_stock(evicted) {
            effects.motions.push(CardMotion::new(evicted, CardZone::Stock, CardZone::Tray));
        }
    }
    model.set_tray(record.previous_tray);

    for flip in record.flips.iter().rev() {
        model.set_face_up(flip.card, flip.previous_face_up);
        effects.flips.push(FlipData { card: flip.card, face_up: flip.previous_face_up });
    }

    effects.settled(model)
}
