//! Falling piece movement, rotation and landing

use lcd_tetris::core::tetromino::Blocks;
use lcd_tetris::core::{template, Board, Tetromino};
use lcd_tetris::types::{Direction, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_COLUMN};

fn dropped(kind: ShapeKind, rows: usize, board: &Board) -> Tetromino {
    let mut piece = Tetromino::new(kind);
    for _ in 0..rows {
        assert!(!piece.move_down(board));
    }
    piece
}

#[test]
fn spawn_offsets_follow_the_template() {
    for kind in ShapeKind::ALL {
        let piece = Tetromino::new(kind);
        let expected = template(kind).map(|(dx, dy)| (SPAWN_COLUMN + dx, dy));
        assert_eq!(piece.blocks(), &expected, "{kind:?}");
        assert_eq!(piece.kind(), kind);
    }
}

#[test]
fn spawn_collides_with_occupied_pixel() {
    let mut board = Board::new();
    assert!(!Tetromino::new(ShapeKind::I).collide(&board));

    board.set(SPAWN_COLUMN + 3, 0, true);
    assert!(Tetromino::new(ShapeKind::I).collide(&board));
}

#[test]
fn shift_moves_one_column() {
    let board = Board::new();
    let mut piece = Tetromino::new(ShapeKind::T);

    assert!(piece.shift(&board, Direction::Left));
    assert_eq!(piece.blocks(), &[(6, 0), (7, 1), (7, 0), (8, 0)]);

    assert!(piece.shift(&board, Direction::Right));
    assert!(piece.shift(&board, Direction::Right));
    assert_eq!(piece.blocks(), &[(8, 0), (9, 1), (9, 0), (10, 0)]);
}

#[test]
fn shift_stops_at_the_walls() {
    let board = Board::new();
    let mut piece = Tetromino::new(ShapeKind::I);

    let mut moves = 0;
    while piece.shift(&board, Direction::Left) {
        moves += 1;
    }
    assert_eq!(moves, SPAWN_COLUMN);
    assert_eq!(piece.blocks(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);

    while piece.shift(&board, Direction::Right) {}
    let right = BOARD_WIDTH as i8 - 1;
    assert_eq!(piece.blocks()[3], (right, 0));
}

#[test]
fn blocked_shift_leaves_piece_untouched() {
    let mut board = Board::new();
    board.set(6, 0, true);

    let mut piece = Tetromino::new(ShapeKind::T);
    let before: Blocks = *piece.blocks();

    assert!(!piece.shift(&board, Direction::Left));
    assert_eq!(piece.blocks(), &before);
}

#[test]
fn rotation_turns_around_the_pivot() {
    let board = Board::new();
    let mut piece = dropped(ShapeKind::T, 1, &board);
    assert_eq!(piece.blocks(), &[(7, 1), (8, 2), (8, 1), (9, 1)]);

    assert!(piece.rotate(&board));
    // (x, y) -> (px - (y - py), py + (x - px)) around (8, 1)
    assert_eq!(piece.blocks(), &[(8, 0), (7, 1), (8, 1), (8, 2)]);
}

#[test]
fn four_rotations_return_to_start() {
    let board = Board::new();
    for kind in ShapeKind::ALL.into_iter().filter(|&k| k != ShapeKind::O) {
        let mut piece = dropped(kind, 4, &board);
        let start = *piece.blocks();
        for _ in 0..4 {
            assert!(piece.rotate(&board), "{kind:?}");
        }
        assert_eq!(piece.blocks(), &start, "{kind:?}");
    }
}

#[test]
fn rotation_off_the_board_is_rejected() {
    let board = Board::new();
    // At row 0 the T's rotated first block lands at y = -1.
    let mut piece = Tetromino::new(ShapeKind::T);
    let before = *piece.blocks();

    assert!(!piece.rotate(&board));
    assert_eq!(piece.blocks(), &before);
}

#[test]
fn rotation_into_occupied_pixel_is_rejected() {
    let mut board = Board::new();
    let mut piece = dropped(ShapeKind::T, 1, &board);
    board.set(8, 0, true);
    let before = *piece.blocks();

    assert!(!piece.rotate(&board));
    assert_eq!(piece.blocks(), &before);
}

#[test]
fn square_never_rotates() {
    let board = Board::new();
    let mut piece = dropped(ShapeKind::O, 5, &board);
    let before = *piece.blocks();

    assert!(piece.is_square());
    assert!(!piece.rotate(&board));
    assert_eq!(piece.blocks(), &before);
}

#[test]
fn move_down_lands_on_the_floor() {
    let board = Board::new();
    let mut piece = Tetromino::new(ShapeKind::I);

    let mut steps = 0;
    while !piece.move_down(&board) {
        steps += 1;
    }
    assert_eq!(steps, BOARD_HEIGHT as usize - 1);

    // A landed piece reports landing again without moving.
    let before = *piece.blocks();
    assert!(piece.move_down(&board));
    assert_eq!(piece.blocks(), &before);
}

#[test]
fn move_down_lands_on_the_stack() {
    let mut board = Board::new();
    board.set(SPAWN_COLUMN + 1, 10, true);

    let mut piece = Tetromino::new(ShapeKind::O);
    let mut steps = 0;
    while !piece.move_down(&board) {
        steps += 1;
    }
    // The square's bottom row rests on row 9.
    assert_eq!(steps, 8);
    assert!(piece.is_landed(&board));
}

#[test]
fn draw_sets_and_clears_pixels() {
    let mut board = Board::new();
    let piece = Tetromino::new(ShapeKind::S);

    piece.draw(&mut board, true);
    assert_eq!(board.cells().iter().filter(|&&c| c).count(), 4);
    for &(x, y) in piece.blocks() {
        assert!(board.at(x, y));
    }

    piece.draw(&mut board, false);
    assert!(board.is_empty());
}
