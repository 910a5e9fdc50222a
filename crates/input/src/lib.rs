//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the controller's four buttons and keeps a
//! level-style "held" state per button, suitable for terminals without
//! key-release events.

pub mod handler;
pub mod map;

pub use lcd_tetris_core as core;
pub use lcd_tetris_types as types;

pub use handler::KeyboardButtons;
pub use map::{button_for_key, should_quit};
