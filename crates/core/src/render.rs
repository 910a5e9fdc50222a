//! Glyph renderer: folds the playfield onto the LCD's custom glyphs.
//!
//! The playfield is split into [`GLYPH_CELLS`] cells of 8x5 pixels. Cell `i`
//! owns glyph slot `i` and one fixed character position on the display. Each
//! pass packs every cell into a [`Glyph`] and only cells whose bitmap differs
//! from the cached one cost display I/O (a glyph redefinition followed by a
//! character write).
//!
//! The display is mounted sideways. Playfield row 0 runs along the left edge,
//! so a cell's pixel rows become glyph pixel columns (bit 4 = leftmost) and
//! its pixel columns become glyph rows, the rightmost playfield column on the
//! top glyph row.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::hal::GlyphDisplay;
use crate::tetromino::Tetromino;
use crate::types::{
    Glyph, BLOCK_HEIGHT, BLOCK_WIDTH, CELLS_X, CELLS_Y, GLYPH_CELLS, GLYPH_COLUMNS, GLYPH_ROWS,
    MAX_DISPLAY_SCORE, SCORE_VALUE_POS,
};

/// Cells redrawn by one pass, by cell index
pub type Redrawn = ArrayVec<u8, GLYPH_CELLS>;

/// Display position (column, row) of cell `cell`.
#[inline]
pub fn cell_position(cell: usize) -> (u8, u8) {
    let col = (cell % CELLS_Y as usize) as u8;
    let row = (cell / CELLS_Y as usize) as u8;
    (col, row)
}

/// Top-left playfield pixel (x, y) covered by cell `cell`.
#[inline]
pub fn cell_origin(cell: usize) -> (i8, i8) {
    let (col, row) = cell_position(cell);
    let cx = CELLS_X - 1 - row;
    ((cx * BLOCK_WIDTH) as i8, (col * BLOCK_HEIGHT) as i8)
}

/// Cell index covering playfield pixel (x, y).
pub fn cell_of(x: i8, y: i8) -> usize {
    debug_assert!(Board::in_bounds(x, y), "({x}, {y}) is off the board");
    let row = CELLS_X - 1 - (x as u8 / BLOCK_WIDTH);
    let col = y as u8 / BLOCK_HEIGHT;
    row as usize * CELLS_Y as usize + col as usize
}

/// Pack the pixels of `cell` into a glyph bitmap.
pub fn pack_cell(board: &Board, cell: usize) -> Glyph {
    let (x0, y0) = cell_origin(cell);
    let mut glyph = [0u8; GLYPH_ROWS];

    for (glyph_row, byte) in glyph.iter_mut().enumerate() {
        let x = x0 + (BLOCK_WIDTH as usize - 1 - glyph_row) as i8;
        for glyph_col in 0..GLYPH_COLUMNS {
            if board.at(x, y0 + glyph_col as i8) {
                *byte |= 1 << (GLYPH_COLUMNS - 1 - glyph_col);
            }
        }
    }

    glyph
}

/// Diffing renderer holding the last bitmap sent for every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRenderer {
    cache: [Glyph; GLYPH_CELLS],
}

impl GlyphRenderer {
    pub fn new() -> Self {
        Self {
            cache: [[0; GLYPH_ROWS]; GLYPH_CELLS],
        }
    }

    /// Forget everything sent so far; a blank display matches the reset cache.
    pub fn reset(&mut self) {
        self.cache = [[0; GLYPH_ROWS]; GLYPH_CELLS];
    }

    /// Last bitmap sent for `cell`
    pub fn cached(&self, cell: usize) -> &Glyph {
        &self.cache[cell]
    }

    /// Reconcile the display with `board` plus the optional falling `piece`.
    ///
    /// The piece is projected onto the board for the duration of the pass and
    /// retracted afterwards, leaving the board's permanent state untouched.
    /// Returns the indices of the cells that were re-sent.
    pub fn render<D: GlyphDisplay>(
        &mut self,
        board: &mut Board,
        piece: Option<&Tetromino>,
        display: &mut D,
    ) -> Redrawn {
        if let Some(piece) = piece {
            piece.draw(board, true);
        }

        let mut redrawn = Redrawn::new();
        for cell in 0..GLYPH_CELLS {
            let glyph = pack_cell(board, cell);
            if glyph == self.cache[cell] {
                continue;
            }

            let slot = cell as u8;
            let (col, row) = cell_position(cell);
            display.define_glyph(slot, &glyph);
            display.write_glyph(col, row, slot);
            self.cache[cell] = glyph;
            redrawn.push(slot);
        }

        if let Some(piece) = piece {
            piece.draw(board, false);
        }

        if !redrawn.is_empty() {
            tracing::trace!(cells = redrawn.len(), "glyphs redrawn");
        }
        redrawn
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Score as printed on the display, capped at [`MAX_DISPLAY_SCORE`].
pub fn display_score(score: u32) -> u32 {
    score.min(MAX_DISPLAY_SCORE)
}

/// Print the running score at its fixed position.
pub fn draw_score<D: GlyphDisplay>(display: &mut D, score: u32) {
    let (col, row) = SCORE_VALUE_POS;
    display.print(col, row, &format!("{:>3}", display_score(score)));
}
