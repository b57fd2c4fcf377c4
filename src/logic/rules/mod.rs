// src/logic/rules/mod.rs
//! トライピークスのルール関連モジュールをまとめるよ！

pub mod common;
pub mod playfield;
pub mod stock_tray;
pub mod win_condition;


pub use common::*;
pub use playfield::*;
pub use stock_tray::*;
pub use win_condition::*;
