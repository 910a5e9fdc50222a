//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, LCD emulation, host input).
//!
//! # Playfield Geometry
//!
//! The playfield is a grid of logical pixels that is folded onto a small
//! character LCD with redefinable 5x8 glyphs:
//!
//! - **Width**: 16 pixels (indexed 0-15)
//! - **Height**: 20 pixels (indexed 0-19), row 0 is the top
//! - **Block**: every display cell covers 8 columns x 5 rows of pixels
//! - **Cells**: (16 / 8) x (20 / 5) = 2 x 4 = 8 cells, one glyph slot each
//!
//! The LCD is mounted sideways: the top of the playfield runs along the left
//! edge of the display and pieces fall towards the right edge.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INPUT_COOLDOWN_MS` | 150 | Minimum gap between left/right/rotate actions |
//! | `MOVE_COOLDOWN_MS` | 500 | Gravity step interval |
//! | `RAPID_FALL_STEP_MS` | 30 | Delay between rapid-fall steps |
//! | `INTRO_MS` | 2000 | Title screen hold |
//! | `GAME_OVER_HOLD_MS` | 3000 | Score screen hold before the restart prompt |
//!
//! # Examples
//!
//! ```
//! use lcd_tetris_types::{Button, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, GLYPH_CELLS};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(Button::from_str("rapidFall"), Some(Button::RapidFall));
//!
//! assert_eq!(BOARD_WIDTH, 16);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(GLYPH_CELLS, 8);
//! ```

/// Playfield width in logical pixels
pub const BOARD_WIDTH: u8 = 16;

/// Playfield height in logical pixels
pub const BOARD_HEIGHT: u8 = 20;

/// Pixel columns covered by one display cell
pub const BLOCK_WIDTH: u8 = 8;

/// Pixel rows covered by one display cell
pub const BLOCK_HEIGHT: u8 = 5;

/// Display cells across the playfield width
pub const CELLS_X: u8 = BOARD_WIDTH / BLOCK_WIDTH;

/// Display cells along the playfield height
pub const CELLS_Y: u8 = BOARD_HEIGHT / BLOCK_HEIGHT;

/// Number of display cells covering the playfield, one glyph slot each
pub const GLYPH_CELLS: usize = (CELLS_X as usize) * (CELLS_Y as usize);

/// Custom glyph slots offered by the display controller
pub const GLYPH_SLOTS: usize = 8;

/// Character columns of the display
pub const LCD_COLUMNS: u8 = 16;

/// Character rows of the display
pub const LCD_ROWS: u8 = 2;

/// Pixel rows of one glyph (bytes per glyph bitmap)
pub const GLYPH_ROWS: usize = 8;

/// Pixel columns of one glyph (significant low bits per glyph byte)
pub const GLYPH_COLUMNS: u8 = 5;

/// Column every new piece template is anchored at
pub const SPAWN_COLUMN: i8 = 7;

/// Gap between left/right/rotate actions
pub const INPUT_COOLDOWN_MS: u64 = 150;

/// Gravity step interval
pub const MOVE_COOLDOWN_MS: u64 = 500;

/// Delay between steps of a rapid-fall burst
pub const RAPID_FALL_STEP_MS: u64 = 30;

/// Title screen hold
pub const INTRO_MS: u64 = 2000;

/// Final score screen hold before the restart prompt
pub const GAME_OVER_HOLD_MS: u64 = 3000;

/// Points per landed piece
pub const LANDING_SCORE: u32 = 1;

/// Bonus points per cleared line
pub const LINE_BONUS: u32 = 10;

/// Largest score value the display prints
pub const MAX_DISPLAY_SCORE: u32 = 999;

/// Display position (column, row) of the score caption
pub const SCORE_CAPTION_POS: (u8, u8) = (10, 0);

/// Display position (column, row) of the score value
pub const SCORE_VALUE_POS: (u8, u8) = (10, 1);

/// Bitmap of one display cell: one byte per glyph pixel row, bit 4 is the
/// leftmost pixel column.
pub type Glyph = [u8; GLYPH_ROWS];

/// Persisted high score as stored by the score slot.
pub type HighScore = u16;

// Every playfield cell needs its own glyph slot.
const _: () = assert!(GLYPH_CELLS <= GLYPH_SLOTS);
// A cell's pixel columns map to glyph rows and its pixel rows to glyph columns.
const _: () = assert!(BLOCK_WIDTH as usize == GLYPH_ROWS);
const _: () = assert!(BLOCK_HEIGHT == GLYPH_COLUMNS);
// The playfield cells sit on the display's left edge.
const _: () = assert!(CELLS_X <= LCD_ROWS && CELLS_Y <= LCD_COLUMNS);

/// The seven tetromino shapes
///
/// - **I**: straight bar
/// - **O**: 2x2 square (never rotates)
/// - **T**, **S**, **Z**, **J**, **L**: the remaining classic shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Catalog order, used for uniform random selection
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use lcd_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Horizontal shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for this direction
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// The four digital input lines of the controller
///
/// Each line idles high and reads as asserted when pulled low; the input
/// capability reports the logical (asserted) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Rotate,
    RapidFall,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Left, Button::Right, Button::Rotate, Button::RapidFall];

    /// Parse button from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Button::Left),
            "right" => Some(Button::Right),
            "rotate" => Some(Button::Rotate),
            "rapidfall" | "drop" => Some(Button::RapidFall),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Left => "left",
            Button::Right => "right",
            Button::Rotate => "rotate",
            Button::RapidFall => "rapidFall",
        }
    }

    /// Dense index, handy for per-button state arrays
    pub fn index(&self) -> usize {
        match self {
            Button::Left => 0,
            Button::Right => 1,
            Button::Rotate => 2,
            Button::RapidFall => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playfield_folds_onto_eight_glyphs() {
        assert_eq!(CELLS_X, 2);
        assert_eq!(CELLS_Y, 4);
        assert_eq!(GLYPH_CELLS, GLYPH_SLOTS);
    }

    #[test]
    fn score_columns_do_not_overlap_playfield() {
        assert!(SCORE_CAPTION_POS.0 >= CELLS_Y);
        assert!(SCORE_VALUE_POS.0 >= CELLS_Y);
        // "999" fits on the row.
        assert!(SCORE_VALUE_POS.0 + 3 <= LCD_COLUMNS);
    }

    #[test]
    fn names_roundtrip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
        for button in Button::ALL {
            assert_eq!(Button::from_str(button.as_str()), Some(button));
        }
    }

    #[test]
    fn button_indices_are_dense() {
        let mut seen = [false; 4];
        for button in Button::ALL {
            seen[button.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
