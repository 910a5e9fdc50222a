//! The engine driving the emulated LCD through keyboard buttons, the way the
//! terminal host wires it.

use crossterm::event::KeyCode;

use lcd_tetris::core::{Game, GameConfig, Io, MemoryStore, Phase};
use lcd_tetris::input::KeyboardButtons;
use lcd_tetris::term::{CharCell, LcdPanel, LcdView, PixelMode, Viewport};
use lcd_tetris::types::ShapeKind;

type PanelIo = Io<KeyboardButtons, LcdPanel, MemoryStore>;

fn panel_io() -> PanelIo {
    Io::new(KeyboardButtons::new(), LcdPanel::new(), MemoryStore::default())
}

fn tick(game: &mut Game, io: &mut PanelIo, now: u64) {
    io.buttons.update(now);
    game.tick(now, io);
}

#[test]
fn title_then_score_caption() {
    let mut io = panel_io();
    let mut game = Game::new(GameConfig::default());

    game.init(0, &mut io);
    assert_eq!(io.display.text_row(0).trim(), "TETRIS");
    assert_eq!(io.display.text_row(1).trim(), "turn sideways");

    tick(&mut game, &mut io, 2_000);
    assert_eq!(&io.display.text_row(0)[10..15], "Score");
    assert_eq!(io.display.cell(12, 1), CharCell::Text('0'));
}

#[test]
fn spawned_piece_lights_the_expected_pixels() {
    let mut io = panel_io();
    let mut game = Game::new(GameConfig::default());
    game.init(0, &mut io);
    tick(&mut game, &mut io, 2_000);

    game.queue_shape(ShapeKind::I);
    tick(&mut game, &mut io, 2_001);

    // Board (7, 0) sits in the bottom-left character, top glyph row.
    assert_eq!(io.display.cell(0, 1), CharCell::Glyph(4));
    assert!(io.display.pixel(0, 1, 0, 0));
    // Board (8, 0) sits in the top-left character, bottom glyph row.
    assert_eq!(io.display.cell(0, 0), CharCell::Glyph(0));
    assert!(io.display.pixel(0, 0, 0, 7));
    assert!(!io.display.pixel(0, 0, 1, 7));
}

#[test]
fn key_press_moves_piece_and_redraws_only_changed_cells() {
    let mut io = panel_io();
    let mut game = Game::new(GameConfig::default());
    game.init(0, &mut io);
    tick(&mut game, &mut io, 2_000);
    game.queue_shape(ShapeKind::O);
    tick(&mut game, &mut io, 2_001);
    let before = io.display.stats();

    io.buttons.handle_key_press(KeyCode::Left, 2_200);
    tick(&mut game, &mut io, 2_200);

    assert_eq!(game.active().map(|p| p.blocks()[0]), Some((6, 0)));
    let after = io.display.stats();
    // The square straddles both character rows of the first column.
    assert_eq!(after.glyph_defines - before.glyph_defines, 2);
    assert_eq!(after.glyph_writes - before.glyph_writes, 2);
}

#[test]
fn keyboard_restart_after_game_over() {
    let mut io = panel_io();
    let mut game = Game::new(GameConfig::default());
    game.init(0, &mut io);
    tick(&mut game, &mut io, 2_000);
    game.board_mut().set(7, 0, true);
    game.queue_shape(ShapeKind::I);
    tick(&mut game, &mut io, 2_001);
    assert_eq!(io.display.text_row(0).trim_end(), "Score   0");

    tick(&mut game, &mut io, 5_001);
    assert_eq!(game.phase(), Phase::AwaitingRestart);
    assert_eq!(io.display.text_row(0).trim_end(), "Press rotate");

    io.buttons.handle_key_press(KeyCode::Up, 5_100);
    tick(&mut game, &mut io, 5_100);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn view_shows_panel_and_status() {
    let mut io = panel_io();
    let mut game = Game::new(GameConfig::default());
    game.init(0, &mut io);
    tick(&mut game, &mut io, 2_000);

    let view = LcdView::new().with_mode(PixelMode::HalfBlock);
    let empty = view.render(&io.display, "status", Viewport::new(120, 40));

    game.queue_shape(ShapeKind::I);
    tick(&mut game, &mut io, 2_001);
    let with_piece = view.render(&io.display, "status", Viewport::new(120, 40));

    assert_ne!(empty, with_piece);
    assert!((0..40).any(|y| with_piece.row_text(y).contains("status")));
}
