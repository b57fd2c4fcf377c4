// src/app/session.rs
//! 1ゲーム分の状態をまとめて持つセッションだよ！🎮
//!
//! The session owns the model and the undo stack and turns the three player
//! intents (tap a playfield card, tap the stock, tap undo) into controller
//! calls. Every intent runs to completion before returning and reports what
//! happened as a list of [`SessionEvent`]s, which also go to the listener if
//! one is installed.

use std::path::Path;

use log::{info, warn};

use crate::app::{playfield_handler, stock_handler, undo_manager::UndoManager};
use crate::components::{CardId, GameStatus};
use crate::config::{LevelConfig, SessionConfig};
use crate::error::{LevelError, MoveRejection};
use crate::logic::level_generator;
use crate::logic::rules::check_win_condition;
use crate::model::{GameModel, UndoMove};
use crate::protocol::{GameStateData, MoveEffects, MoveOutcome, SessionEvent};

type Listener = Box<dyn FnMut(&SessionEvent)>;

pub struct GameSession {
    model: GameModel,
    undo: UndoManager,
    status: GameStatus,
    started: bool,
    listener: Option<Listener>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session with no level loaded. Intents are rejected until
    /// [`GameSession::start`] succeeds.
    pub fn new() -> Self {
        Self {
            model: GameModel::new(),
            undo: UndoManager::new(),
            status: GameStatus::Playing,
            started: false,
            listener: None,
        }
    }

    pub fn new_game(level: &LevelConfig, config: &SessionConfig) -> Result<Self, LevelError> {
        let mut session = Self::new();
        session.start(level, config)?;
        Ok(session)
    }

    pub fn from_json(json: &str, config: &SessionConfig) -> Result<Self, LevelError> {
        Self::new_game(&LevelConfig::from_json_str(json)?, config)
    }

    pub fn from_file(path: impl AsRef<Path>, config: &SessionConfig) -> Result<Self, LevelError> {
        Self::new_game(&LevelConfig::load_from_file(path)?, config)
    }

    /// Receives every event the session emits from now on.
    pub fn set_listener(&mut self, listener: impl FnMut(&SessionEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Deals a new level, replacing the current game. On failure the current
    /// game is left alone.
    pub fn start(&mut self, level: &LevelConfig, config: &SessionConfig) -> Result<Vec<SessionEvent>, LevelError> {
        let mut rng = config.rng();
        let model = level_generator::generate(level, &mut rng)?;

        self.model = model;
        self.undo.clear();
        if config.draw_initial_card {
            stock_handler::draw_initial_card(&mut self.model);
        }
        self.undo.clear();
        self.started = true;
        self.status = GameStatus::Playing;
        info!("Game started with {} cards", self.model.card_count());

        let mut events = vec![SessionEvent::GameStarted {
            tray: self.model.tray(),
            stock_count: self.model.stock_len(),
        }];
        self.refresh_status(&mut events);
        Ok(self.emit(events))
    }

    pub fn start_from_json(&mut self, json: &str, config: &SessionConfig) -> Result<Vec<SessionEvent>, LevelError> {
        let level = LevelConfig::from_json_str(json)?;
        self.start(&level, config)
    }

    // --- intents ---

    pub fn card_tapped(&mut self, id: CardId) -> Vec<SessionEvent> {
        if !self.started {
            return self.reject(MoveRejection::NoGame);
        }
        let result = playfield_handler::handle_card_tap(&mut self.model, id);
        self.apply(result)
    }

    pub fn stock_tapped(&mut self) -> Vec<SessionEvent> {
        if !self.started {
            return self.reject(MoveRejection::NoGame);
        }
        let result = stock_handler::handle_stock_tap(&mut self.model);
        self.apply(result)
    }

    pub fn undo_tapped(&mut self) -> Vec<SessionEvent> {
        let Some(record) = self.undo.pop() else {
            return self.reject(MoveRejection::NothingToUndo);
        };
        let effects = self.revert(&record);
        let mut events = vec![SessionEvent::MoveUndone { effects }];
        self.refresh_status(&mut events);
        self.emit(events)
    }

    // --- queries ---

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn snapshot(&self) -> GameStateData {
        GameStateData::from_model(&self.model, self.can_undo())
    }

    // --- internals ---

    fn apply(&mut self, result: Result<MoveOutcome, MoveRejection>) -> Vec<SessionEvent> {
        match result {
            Ok(MoveOutcome { undo, effects }) => {
                self.undo.push(undo);
                let mut events = vec![SessionEvent::MoveApplied { effects }];
                self.refresh_status(&mut events);
                self.emit(events)
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    fn revert(&mut self, record: &UndoMove) -> MoveEffects {
        match record {
            UndoMove::PlayfieldMatch(record) => playfield_handler::undo_match(&mut self.model, record),
            UndoMove::StockDraw(record) => stock_handler::undo_draw(&mut self.model, record),
        }
    }

    fn reject(&mut self, rejection: MoveRejection) -> Vec<SessionEvent> {
        warn!("Move rejected: {}", rejection);
        self.emit(vec![SessionEvent::MoveRejected { reason: rejection.to_string() }])
    }

    fn refresh_status(&mut self, events: &mut Vec<SessionEvent>) {
        let status = check_win_condition(&self.model);
        if status != self.status {
            info!("Game status: {:?} -> {:?}", self.status, status);
            self.status = status;
            events.push(SessionEvent::VictoryChanged { victory: status.is_won() });
        }
    }

    fn emit(&mut self, events: Vec<SessionEvent>) -> Vec<SessionEvent> {
        if let Some(listener) = self.listener.as_mut() {
            for event in &events {
                listener(event);
            }
        }
        events
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
