//! Glyph renderer traffic: only changed cells reach the display

mod common;

use common::RecordingDisplay;
use lcd_tetris::core::{cell_of, cell_position, pack_cell, Board, GlyphRenderer, Tetromino};
use lcd_tetris::types::{ShapeKind, GLYPH_CELLS, LCD_COLUMNS, LCD_ROWS};

#[test]
fn empty_board_on_fresh_renderer_sends_nothing() {
    let mut board = Board::new();
    let mut renderer = GlyphRenderer::new();
    let mut display = RecordingDisplay::default();

    let redrawn = renderer.render(&mut board, None, &mut display);

    assert!(redrawn.is_empty());
    assert!(display.defines.is_empty());
    assert!(display.writes.is_empty());
}

#[test]
fn identical_frame_costs_no_io() {
    let mut board = Board::new();
    board.set(2, 17, true);
    board.set(12, 3, true);
    let piece = Tetromino::new(ShapeKind::L);

    let mut renderer = GlyphRenderer::new();
    let mut display = RecordingDisplay::default();

    renderer.render(&mut board, Some(&piece), &mut display);
    assert!(!display.writes.is_empty());

    display.reset_glyph_log();
    let redrawn = renderer.render(&mut board, Some(&piece), &mut display);

    assert!(redrawn.is_empty());
    assert!(display.defines.is_empty());
    assert!(display.writes.is_empty());
}

#[test]
fn single_pixel_change_redraws_one_cell() {
    let mut board = Board::new();
    let mut renderer = GlyphRenderer::new();
    let mut display = RecordingDisplay::default();
    renderer.render(&mut board, None, &mut display);

    board.set(9, 12, true);
    let redrawn = renderer.render(&mut board, None, &mut display);

    let cell = cell_of(9, 12);
    let slot = cell as u8;
    let (col, row) = cell_position(cell);
    assert_eq!(redrawn.as_slice(), &[slot]);
    assert_eq!(display.defines, vec![(slot, pack_cell(&board, cell))]);
    assert_eq!(display.writes, vec![(col, row, slot)]);
}

#[test]
fn define_precedes_write_for_every_cell() {
    let mut board = Board::new();
    for x in 0..16 {
        board.set(x, 19, true);
        board.set(x, 0, true);
    }

    let mut renderer = GlyphRenderer::new();
    let mut display = RecordingDisplay::default();
    let redrawn = renderer.render(&mut board, None, &mut display);

    // Rows 0 and 19 touch the first and last column of both display rows.
    assert_eq!(redrawn.len(), 4);
    assert_eq!(display.defines.len(), display.writes.len());
    for ((slot, _), (col, row, written)) in display.defines.iter().zip(&display.writes) {
        assert_eq!(slot, written);
        assert_eq!((*col, *row), cell_position(*slot as usize));
    }
}

#[test]
fn cell_positions_stay_on_the_display() {
    for cell in 0..GLYPH_CELLS {
        let (col, row) = cell_position(cell);
        assert!(col < LCD_COLUMNS && row < LCD_ROWS, "cell {cell}");
    }
}

#[test]
fn falling_piece_is_shown_but_not_committed() {
    let mut board = Board::new();
    let piece = Tetromino::new(ShapeKind::O);

    let mut renderer = GlyphRenderer::new();
    let mut display = RecordingDisplay::default();
    renderer.render(&mut board, Some(&piece), &mut display);

    assert!(board.is_empty());
    let cell = cell_of(7, 0);
    assert_ne!(renderer.cached(cell), &[0; 8]);

    // Moving the piece away restores the blank glyph.
    display.reset_glyph_log();
    renderer.render(&mut board, None, &mut display);
    assert_eq!(renderer.cached(cell), &[0; 8]);
    assert_eq!(display.defines.len(), 2);
}

#[test]
fn reset_forces_a_full_resend() {
    let mut board = Board::new();
    board.set(0, 0, true);

    let mut renderer = GlyphRenderer::new();
    let mut display = RecordingDisplay::default();
    renderer.render(&mut board, None, &mut display);

    renderer.reset();
    display.reset_glyph_log();
    renderer.render(&mut board, None, &mut display);

    assert_eq!(display.writes.len(), 1);
}
