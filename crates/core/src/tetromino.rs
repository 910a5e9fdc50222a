//! Tetromino module - shape catalog, movement and rotation of the falling piece
//!
//! A tetromino is four explicit block positions on the board. Every operation
//! is all-or-nothing: the candidate positions are computed and validated
//! first, and the blocks are only replaced when every candidate is on the
//! board and unoccupied.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{Direction, ShapeKind, BOARD_HEIGHT, SPAWN_COLUMN};

/// Position of a single block, (x, y)
pub type Block = (i8, i8);

/// The four blocks of a piece
pub type Blocks = [Block; 4];

/// Index of the block every rotation pivots around
pub const PIVOT: usize = 2;

/// Relative block offsets of each shape in spawn orientation.
///
/// Block order matters: index 2 is the rotation pivot, and the square is the
/// only shape whose first and last blocks are diagonal neighbours.
pub fn template(kind: ShapeKind) -> Blocks {
    match kind {
        // ####
        ShapeKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
        // ##
        // ##
        ShapeKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        // ###
        //  #
        ShapeKind::T => [(0, 0), (1, 1), (1, 0), (2, 0)],
        //  ##
        // ##
        ShapeKind::S => [(0, 1), (1, 1), (1, 0), (2, 0)],
        // ##
        //  ##
        ShapeKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
        // #
        // ###
        ShapeKind::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
        //   #
        // ###
        ShapeKind::L => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: ShapeKind,
    blocks: Blocks,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position (spawn column, row 0)
    pub fn new(kind: ShapeKind) -> Self {
        let blocks = template(kind).map(|(dx, dy)| (SPAWN_COLUMN + dx, dy));
        Self { kind, blocks }
    }

    /// Create a tetromino of a uniformly random shape
    pub fn random(rng: &mut SimpleRng) -> Self {
        Self::new(rng.next_shape())
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    /// Check if any block sits on an occupied pixel
    pub fn collide(&self, board: &Board) -> bool {
        self.blocks
            .iter()
            .any(|&(x, y)| Board::in_bounds(x, y) && board.at(x, y))
    }

    /// Shift one column left or right. Returns false (and leaves the piece
    /// untouched) if any block would leave the board or hit an occupied pixel.
    pub fn shift(&mut self, board: &Board, direction: Direction) -> bool {
        let dx = direction.dx();
        let moved = self.blocks.map(|(x, y)| (x + dx, y));
        self.replace_if_free(board, moved)
    }

    /// True for the square, detected by its first and last blocks being
    /// diagonal neighbours
    pub fn is_square(&self) -> bool {
        let (fx, fy) = self.blocks[0];
        let (lx, ly) = self.blocks[3];
        (fx - lx).abs() == 1 && (fy - ly).abs() == 1
    }

    /// Rotate 90 degrees around the pivot block.
    ///
    /// `(x, y)` becomes `(px - (y - py), py + (x - px))`. The square never
    /// rotates. Returns false and leaves the piece untouched when any rotated
    /// block is off the board or on an occupied pixel.
    pub fn rotate(&mut self, board: &Board) -> bool {
        if self.is_square() {
            return false;
        }

        let (px, py) = self.blocks[PIVOT];
        let rotated = self.blocks.map(|(x, y)| {
            let (dx, dy) = (x - px, y - py);
            (px - dy, py + dx)
        });
        self.replace_if_free(board, rotated)
    }

    /// Check if the piece cannot fall any further
    pub fn is_landed(&self, board: &Board) -> bool {
        self.blocks
            .iter()
            .any(|&(x, y)| y >= BOARD_HEIGHT as i8 - 1 || board.at(x, y + 1))
    }

    /// Move one row down.
    ///
    /// Returns true ("landed") without moving when any block is on the bottom
    /// row or above an occupied pixel; otherwise moves and returns false.
    pub fn move_down(&mut self, board: &Board) -> bool {
        if self.is_landed(board) {
            return true;
        }
        for block in &mut self.blocks {
            block.1 += 1;
        }
        false
    }

    /// Set (`true`) or clear (`false`) the four block pixels on the board.
    pub fn draw(&self, board: &mut Board, value: bool) {
        for &(x, y) in &self.blocks {
            board.set(x, y, value);
        }
    }

    fn replace_if_free(&mut self, board: &Board, candidate: Blocks) -> bool {
        if !candidate.iter().all(|&(x, y)| board.is_free(x, y)) {
            return false;
        }
        self.blocks = candidate;
        true
    }
}
