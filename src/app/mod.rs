// src/app/mod.rs
//! ゲームの進行を担当する層だよ！ Controllers, the undo stack, the session
//! and the JavaScript facade.

pub mod game_app;
pub mod playfield_handler;
pub mod session;
pub mod stock_handler;
pub mod undo_manager;

pub use game_app::GameApp;
pub use session::GameSession;
pub use undo_manager::UndoManager;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_gens;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests_props_undo;
