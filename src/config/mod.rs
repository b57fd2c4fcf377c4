// src/config/mod.rs
//! レベルファイルとセッション設定。

pub mod level;
pub mod session;

pub use level::{LevelCardConfig, LevelConfig};
pub use session::SessionConfig;
