// src/app/undo_manager.rs

use log::debug;

use crate::model::UndoMove;

/// 取り消し用の記録を積むスタックだよ。Strictly last in, first out.
#[derive(Debug, Clone, Default)]
pub struct UndoManager {
    records: Vec<UndoMove>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: UndoMove) {
        self.records.push(record);
        debug!("Undo stack depth: {}", self.records.len());
    }

    pub fn pop(&mut self) -> Option<UndoMove> {
        self.records.pop()
    }

    pub fn peek(&self) -> Option<&UndoMove> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }
}
