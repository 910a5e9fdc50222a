//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the playfield, the falling piece, the glyph renderer
//! and the game state machine. It talks to the outside world only through the
//! capability traits in [`hal`], so it runs the same against a real
//! microcontroller, the terminal emulator in `lcd-tetris-term`, or a test
//! double.
//!
//! - **Deterministic**: the same seed and input script produce the same game
//! - **Clock-free**: the host passes a millisecond timestamp into every tick
//! - **Fixed memory**: no allocation on the tick path apart from score strings
//!
//! # Module Structure
//!
//! - [`board`]: 16x20 pixel grid with line clearing
//! - [`tetromino`]: shape catalog, all-or-nothing shift / rotate / fall
//! - [`rng`]: uniform random shape selection
//! - [`render`]: packs 8x5 pixel cells into LCD glyphs and redraws only changes
//! - [`game`]: the intro / playing / game-over / restart state machine
//! - [`hal`]: button, display and score-slot capabilities
//! - [`config`]: timing and scoring knobs
//!
//! # Example
//!
//! ```
//! use lcd_tetris_core::{Game, GameConfig, Io, MemoryStore, Phase};
//! use lcd_tetris_core::hal::{Buttons, GlyphDisplay};
//! use lcd_tetris_core::types::{Button, Glyph};
//!
//! struct NoButtons;
//! impl Buttons for NoButtons {
//!     fn is_pressed(&mut self, _: Button) -> bool { false }
//! }
//!
//! struct NullDisplay;
//! impl GlyphDisplay for NullDisplay {
//!     fn clear(&mut self) {}
//!     fn define_glyph(&mut self, _: u8, _: &Glyph) {}
//!     fn write_glyph(&mut self, _: u8, _: u8, _: u8) {}
//!     fn print(&mut self, _: u8, _: u8, _: &str) {}
//! }
//!
//! let mut io = Io::new(NoButtons, NullDisplay, MemoryStore::default());
//! let mut game = Game::new(GameConfig::default());
//!
//! game.init(0, &mut io);
//! game.tick(2_000, &mut io); // intro over
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.tick(2_001, &mut io); // first piece spawns
//! assert!(game.active().is_some());
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod hal;
pub mod render;
pub mod rng;
pub mod tetromino;

pub use lcd_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game::{clamp_high_score, Game, Phase};
pub use hal::{ActiveLow, Buttons, GlyphDisplay, Io, MemoryStore, ScoreStore};
pub use render::{cell_of, cell_position, pack_cell, GlyphRenderer, Redrawn};
pub use rng::SimpleRng;
pub use tetromino::{template, Tetromino};
