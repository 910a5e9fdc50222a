//! Terminal host for the LCD Tetris engine (default binary).
//!
//! Emulates the controller board: the keyboard stands in for the four
//! buttons, an in-memory 16x2 LCD is drawn into the terminal, and a JSON file
//! plays the EEPROM high score slot. The engine itself is driven exactly as
//! firmware would drive it: `init` once, then `tick` with a millisecond clock.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use lcd_tetris::core::{Game, Io, Phase};
use lcd_tetris::input::{should_quit, KeyboardButtons};
use lcd_tetris::settings::{HostSettings, Settings};
use lcd_tetris::store::FileScoreStore;
use lcd_tetris::term::{FrameBuffer, LcdPanel, LcdView, TerminalRenderer, Viewport};

type HostIo = Io<KeyboardButtons, LcdPanel, FileScoreStore>;

fn main() -> Result<()> {
    let settings = Settings::load(std::env::args_os().nth(1).map(PathBuf::from))?;
    init_logging(&settings.host)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(host: &HostSettings) -> Result<()> {
    // The terminal is busy showing the LCD; traces only go to a file.
    let Some(path) = &host.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let mut config = settings.game;
    config.seed = settings.host.seed.unwrap_or_else(time_seed);
    info!(?config, "starting");

    let mut game = Game::new(config);
    let mut io: HostIo = Io::new(
        KeyboardButtons::new().with_key_release_timeout_ms(settings.host.key_release_timeout_ms),
        LcdPanel::new(),
        FileScoreStore::new(&settings.host.high_score_file),
    );

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let view = LcdView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(settings.host.tick_ms);
    let mut last_tick = Instant::now();

    game.init(now_ms(), &mut io);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&io.display, status_line(&game), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        io.buttons.handle_key_press(key.code, now_ms());
                    }
                    KeyEventKind::Release => io.buttons.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now = now_ms();
            io.buttons.update(now);
            game.tick(now, &mut io);
        }
    }
}

fn status_line(game: &Game) -> &'static str {
    match game.phase() {
        Phase::Intro { .. } => "LCD mounted sideways: pieces fall to the right",
        Phase::Playing | Phase::RapidFall { .. } => {
            "←/→ move   ↑ rotate   ↓/space drop   q quit"
        }
        Phase::GameOver { .. } => "game over",
        Phase::AwaitingRestart => "↑ to play again   q quit",
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
