// src/logic/mod.rs
//! ゲームのルールと盤面生成ロジック。

pub mod deck;
pub mod level_generator;
pub mod rules;
