//! Property-based tests for undo exactness and board invariants.
//! Random levels are played with random intents; legal or not, the model
//! must stay consistent and undo must walk back through every state.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::app::session::GameSession;
use crate::app::test_gens::{self, Intent};
use crate::components::CardId;
use crate::config::SessionConfig;
use crate::model::GameModel;
use crate::protocol::SessionEvent;

fn apply(game: &mut GameSession, intent: Intent) -> Vec<SessionEvent> {
    match intent {
        Intent::Card(id) => game.card_tapped(id),
        Intent::Stock => game.stock_tapped(),
        Intent::Undo => game.undo_tapped(),
    }
}

fn is_rejection(events: &[SessionEvent]) -> bool {
    matches!(events, [SessionEvent::MoveRejected { .. }])
}

/// Face-down cards that nothing covers at the start; only these may be
/// face down and exposed later on.
fn uncovered_face_down(model: &GameModel) -> HashSet<CardId> {
    model
        .playfield_ids()
        .iter()
        .copied()
        .filter(|&id| model.is_exposed(id) && model.card(id).map_or(false, |c| !c.is_face_up))
        .collect()
}

fn check_invariants(model: &GameModel, allowed_face_down: &HashSet<CardId>) -> Result<(), TestCaseError> {
    let playfield: HashSet<CardId> = model.playfield_ids().iter().copied().collect();
    let stock: HashSet<CardId> = model.stock_ids().iter().copied().collect();
    prop_assert_eq!(playfield.len(), model.playfield_ids().len(), "playfield has duplicates");
    prop_assert_eq!(stock.len(), model.stock_len(), "stock has duplicates");
    prop_assert!(playfield.is_disjoint(&stock));
    if let Some(tray) = model.tray() {
        prop_assert!(!playfield.contains(&tray) && !stock.contains(&tray));
        prop_assert!(model.card(tray).map_or(false, |c| c.is_face_up), "tray card is face up");
    }

    for card in model.cards() {
        prop_assert_eq!(playfield.contains(&card.id), card.in_playfield() && !card.is_removed);
        if !model.is_exposed(card.id) {
            continue;
        }
        for cover in &card.covered_by {
            prop_assert!(model.is_removed(*cover), "{} exposed while {} is in play", card.id, cover);
        }
        if playfield.contains(&card.id) && !card.is_face_up {
            prop_assert!(allowed_face_down.contains(&card.id), "{} exposed but never revealed", card.id);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: Exact undo
    /// After any run of intents, undoing every applied move visits the
    /// recorded states in reverse and ends at the dealt board.
    #[test]
    fn prop_undo_restores_every_state(
        level in test_gens::level(),
        intents in test_gens::intents(40),
        seed in any::<u64>(),
    ) {
        let mut game = GameSession::new_game(&level, &SessionConfig::seeded(seed)).unwrap();
        let mut history = vec![game.model().clone()];

        for intent in intents {
            let events = apply(&mut game, intent);
            if !is_rejection(&events) {
                history.push(game.model().clone());
            }
        }
        prop_assert_eq!(game.undo_depth(), history.len() - 1);

        history.pop();
        while let Some(expected) = history.pop() {
            let events = game.undo_tapped();
            let undone = matches!(events[0], SessionEvent::MoveUndone { .. });
            prop_assert!(undone, "expected moveUndone, got {:?}", events[0]);
            prop_assert_eq!(game.model(), &expected);
        }
        prop_assert!(!game.can_undo());
        prop_assert!(is_rejection(&game.undo_tapped()));
    }

    /// Property: Rejections are free
    /// A rejected intent leaves the model and the undo stack untouched.
    #[test]
    fn prop_rejected_intents_change_nothing(
        level in test_gens::level(),
        intents in test_gens::intents_with_undo(40),
    ) {
        let mut game = GameSession::new_game(&level, &SessionConfig::seeded(0)).unwrap();
        for intent in intents {
            let before = game.model().clone();
            let depth = game.undo_depth();
            let events = apply(&mut game, intent);
            if is_rejection(&events) {
                prop_assert_eq!(game.model(), &before);
                prop_assert_eq!(game.undo_depth(), depth);
            }
        }
    }

    /// Property: Board consistency
    /// Zones never overlap, exposed cards have nothing in play above them,
    /// and a card is only face down and exposed if it started that way.
    #[test]
    fn prop_board_stays_consistent(
        level in test_gens::level(),
        intents in test_gens::intents_with_undo(60),
    ) {
        let mut game = GameSession::new_game(&level, &SessionConfig::seeded(1)).unwrap();
        let allowed = uncovered_face_down(game.model());
        check_invariants(game.model(), &allowed)?;
        for intent in intents {
            apply(&mut game, intent);
            check_invariants(game.model(), &allowed)?;
            prop_assert_eq!(game.status().is_won(), game.model().playfield_ids().is_empty());
        }
    }
}
