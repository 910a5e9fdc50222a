//! Board module - manages the playfield pixel grid
//!
//! The board is a 16x20 grid of logical pixels, each either free or occupied.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..15 (left to right), y ranges 0..19 (top to bottom)

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of pixels on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

// Rows are exchanged as `u16` bitmasks.
const _: () = assert!(BOARD_WIDTH <= 16);

/// One row as a bitmask, bit `x` set when column `x` is occupied
pub type RowBits = u16;

/// The playfield - 16 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of pixels, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Build a board from per-row bitmasks, row 0 first
    pub fn from_rows(rows: &[RowBits; BOARD_HEIGHT as usize]) -> Self {
        let mut board = Self::new();
        for (y, bits) in rows.iter().enumerate() {
            for x in 0..BOARD_WIDTH as usize {
                board.cells[y * BOARD_WIDTH as usize + x] = bits & (1 << x) != 0;
            }
        }
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> usize {
        debug_assert!(Self::in_bounds(x, y), "({x}, {y}) is off the board");
        (y as usize) * (BOARD_WIDTH as usize) + (x as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if a position lies on the board
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Occupancy at (x, y). The position must be on the board.
    #[inline]
    pub fn at(&self, x: i8, y: i8) -> bool {
        self.cells[Self::index(x, y)]
    }

    /// Set occupancy at (x, y). The position must be on the board.
    #[inline]
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) {
        self.cells[Self::index(x, y)] = occupied;
    }

    /// Check if position is on the board and unoccupied
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        Self::in_bounds(x, y) && !self.at(x, y)
    }

    /// Number of occupied pixels in row `y`
    pub fn row_count(&self, y: usize) -> usize {
        self.row(y).iter().filter(|&&cell| cell).count()
    }

    /// Row `y` as a bitmask
    pub fn row_bits(&self, y: usize) -> RowBits {
        self.row(y)
            .iter()
            .enumerate()
            .fold(0, |acc, (x, &cell)| if cell { acc | (1 << x) } else { acc })
    }

    /// All rows as bitmasks, row 0 first
    pub fn rows(&self) -> [RowBits; BOARD_HEIGHT as usize] {
        let mut out = [0; BOARD_HEIGHT as usize];
        for (y, bits) in out.iter_mut().enumerate() {
            *bits = self.row_bits(y);
        }
        out
    }

    fn row(&self, y: usize) -> &[bool] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Remove row `y` and shift all rows above it down by one
    fn collapse_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(false);
    }

    /// Clear all full rows and return how many were cleared.
    ///
    /// Scans from the bottom row upwards. A full row is collapsed and the
    /// same row index is examined again, since the row above has moved into
    /// it. The scan stops at the first row with no occupied pixels: rows
    /// above an empty row are assumed empty and are never examined, even if
    /// they hold pixels. Scores depend on this, so it stays as is.
    pub fn clear_lines(&mut self) -> u32 {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            match self.row_count(row) {
                0 => break,
                count if count == width => {
                    self.collapse_row(row);
                    cleared += 1;
                }
                _ => y -= 1,
            }
        }

        cleared
    }

    /// Get a reference to the internal pixel array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Check if no pixel is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
