// src/app/session_tests.rs
// GameSession のシナリオテスト！

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::components::{Rank, Suit};
use crate::config::LevelCardConfig;

fn card(rank: Rank) -> LevelCardConfig {
    LevelCardConfig::new(rank, Suit::Spade)
}

fn session(playfield: Vec<LevelCardConfig>, stock: Vec<LevelCardConfig>) -> GameSession {
    GameSession::new_game(&LevelConfig::new(playfield, stock), &SessionConfig::seeded(7)).unwrap()
}

fn rejection(events: &[SessionEvent]) -> Option<&str> {
    match events {
        [SessionEvent::MoveRejected { reason }] => Some(reason.as_str()),
        _ => None,
    }
}

#[test]
fn single_match_wins_and_undo_unwins() {
    let mut game = session(vec![card(Rank::Five).face_up(true)], vec![card(Rank::Six)]);
    assert_eq!(game.model().tray(), Some(CardId(1)));
    assert!(!game.can_undo(), "the initial draw is not undoable");

    let events = game.card_tapped(CardId(0));
    assert!(matches!(events[0], SessionEvent::MoveApplied { .. }));
    assert_eq!(events[1], SessionEvent::VictoryChanged { victory: true });
    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.snapshot().victory);

    let events = game.undo_tapped();
    assert!(matches!(events[0], SessionEvent::MoveUndone { .. }));
    assert_eq!(events[1], SessionEvent::VictoryChanged { victory: false });
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.model().tray(), Some(CardId(1)));
}

#[test]
fn covered_card_is_rejected_without_changes() {
    let mut game = session(
        vec![card(Rank::Six).face_up(true), card(Rank::Four).face_up(true).covered_by(&[0])],
        vec![card(Rank::Five)],
    );
    let before = game.model().clone();

    let events = game.card_tapped(CardId(1));
    assert_eq!(rejection(&events), Some("card #1 is not exposed"));
    assert_eq!(game.model(), &before);
    assert!(!game.can_undo());
}

#[test]
fn mismatched_card_is_rejected() {
    let mut game = session(vec![card(Rank::Nine).face_up(true)], vec![card(Rank::Five)]);
    let events = game.card_tapped(CardId(0));
    assert_eq!(rejection(&events), Some("card does not match the tray"));
}

#[test]
fn ace_goes_on_king() {
    let mut game = session(vec![card(Rank::Ace).face_up(true)], vec![card(Rank::King)]);
    let events = game.card_tapped(CardId(0));
    assert!(matches!(events[0], SessionEvent::MoveApplied { .. }));
    assert_eq!(game.model().tray(), Some(CardId(0)));
}

#[test]
fn drained_stock_rejects_further_draws() {
    let mut game = session(
        vec![card(Rank::Nine).face_up(true)],
        vec![card(Rank::Two), card(Rank::Three), card(Rank::Four), card(Rank::Jack)],
    );
    assert_eq!(game.model().stock_len(), 3);
    for expected_tray in [2, 1, 0] {
        let events = game.stock_tapped();
        assert!(matches!(events[0], SessionEvent::MoveApplied { .. }));
        assert_eq!(game.model().tray(), Some(CardId(expected_tray + 1)));
    }
    assert_eq!(game.model().stock_len(), 0);

    let before = game.model().clone();
    let depth = game.undo_depth();
    let events = game.stock_tapped();
    assert_eq!(rejection(&events), Some("stock is empty"));
    assert_eq!(game.model(), &before);
    assert_eq!(game.model().tray(), Some(CardId(1)));
    assert_eq!(game.undo_depth(), depth);
}

#[test]
fn nothing_to_undo_after_start() {
    let mut game = session(vec![card(Rank::Nine).face_up(true)], vec![card(Rank::Two), card(Rank::Three)]);
    let events = game.undo_tapped();
    assert_eq!(rejection(&events), Some("nothing to undo"));
    assert_eq!(game.model().stock_len(), 1);
}

#[test]
fn tray_must_be_filled_before_matching() {
    let level = LevelConfig::new(vec![card(Rank::Six).face_up(true)], vec![card(Rank::Five)]);
    let config = SessionConfig { draw_initial_card: false, ..SessionConfig::seeded(1) };
    let mut game = GameSession::new_game(&level, &config).unwrap();
    assert_eq!(game.model().tray(), None);

    let events = game.card_tapped(CardId(0));
    assert_eq!(rejection(&events), Some("draw from the stock first"));
    game.stock_tapped();
    let events = game.card_tapped(CardId(0));
    assert!(matches!(events[0], SessionEvent::MoveApplied { .. }));
}

#[test]
fn reveal_then_undo_everything() {
    // #0 Six covers #1 Seven; #2 Eight sits alone.
    let mut game = session(
        vec![
            card(Rank::Six).face_up(true),
            card(Rank::Seven).covered_by(&[0]),
            card(Rank::Eight).face_up(true),
        ],
        vec![card(Rank::Queen), card(Rank::Five)],
    );
    let start = game.model().clone();

    game.card_tapped(CardId(0));
    assert!(game.model().card(CardId(1)).unwrap().is_face_up);
    game.card_tapped(CardId(1));
    game.card_tapped(CardId(2));
    assert_eq!(game.status(), GameStatus::Won);
    game.undo_tapped();
    game.stock_tapped();
    assert_eq!(game.model().tray(), Some(CardId(0)));
    assert_eq!(game.undo_depth(), 3);

    while game.can_undo() {
        game.undo_tapped();
    }
    assert_eq!(game.model(), &start);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn listener_sees_every_event() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut game = GameSession::new();
    let sink = Rc::clone(&seen);
    game.set_listener(move |event| sink.borrow_mut().push(event.clone()));

    let events = game.stock_tapped();
    assert_eq!(rejection(&events), Some("no level loaded"));

    let level = LevelConfig::new(vec![card(Rank::Five).face_up(true)], vec![card(Rank::Six)]);
    let started = game.start(&level, &SessionConfig::seeded(3)).unwrap();
    assert_eq!(started, vec![SessionEvent::GameStarted { tray: Some(CardId(1)), stock_count: 0 }]);
    game.card_tapped(CardId(0));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[3], SessionEvent::VictoryChanged { victory: true });
}

#[test]
fn failed_start_keeps_the_current_game() {
    let mut game = session(vec![card(Rank::Five).face_up(true)], vec![card(Rank::Six)]);
    let before = game.model().clone();
    let result = game.start_from_json(r#"{"playfieldCards": [{"coveredBy": [0]}]}"#, &SessionConfig::default());
    assert!(matches!(result, Err(LevelError::SelfCover { card: 0 })));
    assert_eq!(game.model(), &before);
    assert!(game.is_started());
}

#[test]
fn seeded_json_levels_are_reproducible() {
    let json = r#"{"playfieldCards": [{}, {}, {"cardFace": 3}], "stackCards": [{}, {}]}"#;
    let a = GameSession::from_json(json, &SessionConfig::seeded(11)).unwrap();
    let b = GameSession::from_json(json, &SessionConfig::seeded(11)).unwrap();
    assert_eq!(a.model(), b.model());
    assert_eq!(a.snapshot().cards[2].rank, Rank::Four);
    assert_eq!(a.snapshot().stock_count, 1);
    println!("GameSession テスト、成功！🎉");
}
