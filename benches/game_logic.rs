use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lcd_tetris::core::{Board, Buttons, Game, GameConfig, GlyphDisplay, GlyphRenderer, Io, MemoryStore, Tetromino};
use lcd_tetris::types::{Button, Direction, Glyph, ShapeKind};

struct NoButtons;

impl Buttons for NoButtons {
    fn is_pressed(&mut self, _: Button) -> bool {
        false
    }
}

struct NullDisplay;

impl GlyphDisplay for NullDisplay {
    fn clear(&mut self) {}
    fn define_glyph(&mut self, _: u8, glyph: &Glyph) {
        black_box(glyph);
    }
    fn write_glyph(&mut self, _: u8, _: u8, _: u8) {}
    fn print(&mut self, _: u8, _: u8, _: &str) {}
}

fn bench_tick(c: &mut Criterion) {
    let mut io = Io::new(NoButtons, NullDisplay, MemoryStore::default());
    let mut game = Game::new(GameConfig::default());
    game.init(0, &mut io);
    game.tick(2_000, &mut io);

    let mut now = 2_000;
    c.bench_function("game_tick_10ms", |b| {
        b.iter(|| {
            now += 10;
            game.tick(black_box(now), &mut io);
            if game.phase().is_idle() {
                game.start(now, &mut io);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..16 {
                    board.set(x, y, true);
                }
            }
            board.clear_lines()
        })
    });
}

fn bench_render_full(c: &mut Criterion) {
    let mut board = Board::new();
    for y in (0..20).step_by(3) {
        for x in (0..16).step_by(2) {
            board.set(x, y, true);
        }
    }
    let piece = Tetromino::new(ShapeKind::T);

    c.bench_function("render_all_cells", |b| {
        b.iter(|| {
            let mut renderer = GlyphRenderer::new();
            renderer.render(&mut board, Some(&piece), &mut NullDisplay)
        })
    });
}

fn bench_render_unchanged(c: &mut Criterion) {
    let mut board = Board::new();
    let piece = Tetromino::new(ShapeKind::L);
    let mut renderer = GlyphRenderer::new();
    renderer.render(&mut board, Some(&piece), &mut NullDisplay);

    c.bench_function("render_unchanged", |b| {
        b.iter(|| renderer.render(&mut board, Some(&piece), &mut NullDisplay))
    });
}

fn bench_shift_and_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Tetromino::new(ShapeKind::J);
    piece.move_down(&board);
    piece.move_down(&board);

    c.bench_function("shift_and_rotate", |b| {
        b.iter(|| {
            piece.shift(&board, Direction::Left);
            piece.shift(&board, Direction::Right);
            piece.rotate(&board)
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_render_full,
    bench_render_unchanged,
    bench_shift_and_rotate
);
criterion_main!(benches);
