//! LCD Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `lcd_tetris::{core,input,term,types}` and
//! holds the host-side pieces of the terminal build: settings loading and the
//! file-backed high score slot.

pub mod settings;
pub mod store;

pub use lcd_tetris_core as core;
pub use lcd_tetris_input as input;
pub use lcd_tetris_term as term;
pub use lcd_tetris_types as types;
