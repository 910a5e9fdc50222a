//! Game controller - the timing-driven state machine
//!
//! The host owns the loop and the clock. It calls [`Game::init`] once and
//! then [`Game::tick`] as often as it likes with a monotonic millisecond
//! timestamp. Holds and bursts (title screen, rapid fall, final score) are
//! states that wait for the clock, so nothing here ever sleeps.
//!
//! A playing tick runs strictly in this order:
//!
//! 1. spawn a piece if none is active; a spawn collision ends the game
//! 2. rapid fall: drop the piece step by step until it lands, nothing else runs
//! 3. left / right / rotate, once per input cooldown, in that priority
//! 4. gravity step, once per move cooldown
//! 5. render, if anything changed

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::hal::{Buttons, GlyphDisplay, Io, ScoreStore};
use crate::render::{display_score, draw_score, GlyphRenderer};
use crate::rng::SimpleRng;
use crate::tetromino::Tetromino;
use crate::types::{
    Button, Direction, HighScore, ShapeKind, LANDING_SCORE, SCORE_CAPTION_POS,
};

/// Where the controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, shown until `until_ms`
    Intro { until_ms: u64 },
    /// Normal play
    Playing,
    /// Rapid-fall burst in progress; the next step is due at `next_step_ms`
    RapidFall { next_step_ms: u64 },
    /// Final score screen, shown until `until_ms`
    GameOver { until_ms: u64 },
    /// Restart prompt, waiting for the rotate button
    AwaitingRestart,
}

impl Phase {
    /// Intro/GameOver/AwaitingRestart, where no piece is in play
    pub fn is_idle(&self) -> bool {
        !matches!(self, Phase::Playing | Phase::RapidFall { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Option<Tetromino>,
    renderer: GlyphRenderer,
    rng: SimpleRng,
    queued: Option<ShapeKind>,
    phase: Phase,
    score: u32,
    last_action_ms: u64,
    last_move_ms: u64,
    render_pending: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            active: None,
            renderer: GlyphRenderer::new(),
            rng: SimpleRng::new(config.seed),
            queued: None,
            phase: Phase::Intro { until_ms: 0 },
            score: 0,
            last_action_ms: 0,
            last_move_ms: 0,
            render_pending: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the playfield (for scripted setups)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    pub fn renderer(&self) -> &GlyphRenderer {
        &self.renderer
    }

    /// True when the display lags behind the game state
    pub fn render_pending(&self) -> bool {
        self.render_pending
    }

    /// Make the next spawn use `kind` instead of a random shape.
    pub fn queue_shape(&mut self, kind: ShapeKind) {
        self.queued = Some(kind);
    }

    /// Show the title screen. The first game starts once it has been up for
    /// the configured intro time.
    pub fn init<B, D, S>(&mut self, now_ms: u64, io: &mut Io<B, D, S>)
    where
        D: GlyphDisplay,
    {
        io.display.clear();
        io.display.print(5, 0, "TETRIS");
        io.display.print(2, 1, "turn sideways");
        self.phase = Phase::Intro {
            until_ms: now_ms + self.config.intro_ms,
        };
        info!(until_ms = now_ms + self.config.intro_ms, "intro");
    }

    /// Begin a fresh game: empty board, score 0, timers at `now_ms`.
    pub fn start<B, D, S>(&mut self, now_ms: u64, io: &mut Io<B, D, S>)
    where
        D: GlyphDisplay,
    {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.last_action_ms = now_ms;
        self.last_move_ms = now_ms;
        self.renderer.reset();
        self.render_pending = false;

        io.display.clear();
        let (col, row) = SCORE_CAPTION_POS;
        io.display.print(col, row, "Score");
        draw_score(&mut io.display, self.score);

        self.phase = Phase::Playing;
        info!("game started");
    }

    /// Advance the game to `now_ms`.
    pub fn tick<B, D, S>(&mut self, now_ms: u64, io: &mut Io<B, D, S>)
    where
        B: Buttons,
        D: GlyphDisplay,
        S: ScoreStore,
    {
        match self.phase {
            Phase::Intro { until_ms } => {
                if now_ms >= until_ms {
                    self.start(now_ms, io);
                }
            }
            Phase::Playing => self.play(now_ms, io),
            Phase::RapidFall { next_step_ms } => {
                if now_ms >= next_step_ms {
                    self.rapid_fall_step(now_ms, io);
                }
            }
            Phase::GameOver { until_ms } => {
                if now_ms >= until_ms {
                    io.display.clear();
                    io.display.print(0, 0, "Press rotate");
                    io.display.print(0, 1, "to play again");
                    self.phase = Phase::AwaitingRestart;
                }
            }
            Phase::AwaitingRestart => {
                if io.buttons.is_pressed(Button::Rotate) {
                    self.start(now_ms, io);
                }
            }
        }
    }

    fn play<B, D, S>(&mut self, now_ms: u64, io: &mut Io<B, D, S>)
    where
        B: Buttons,
        D: GlyphDisplay,
        S: ScoreStore,
    {
        if self.active.is_none() {
            let piece = match self.queued.take() {
                Some(kind) => Tetromino::new(kind),
                None => Tetromino::random(&mut self.rng),
            };
            let kind = piece.kind();
            if piece.collide(&self.board) {
                debug!(?kind, "spawn blocked");
                self.game_over(now_ms, io);
                return;
            }
            debug!(?kind, "spawned");
            self.active = Some(piece);
            self.render_pending = true;
        }

        if io.buttons.is_pressed(Button::RapidFall) {
            self.rapid_fall_step(now_ms, io);
            return;
        }

        let Some(piece) = self.active.as_mut() else {
            return;
        };

        if now_ms.saturating_sub(self.last_action_ms) > self.config.input_cooldown_ms {
            let acted = if io.buttons.is_pressed(Button::Left) {
                piece.shift(&self.board, Direction::Left)
            } else if io.buttons.is_pressed(Button::Right) {
                piece.shift(&self.board, Direction::Right)
            } else if io.buttons.is_pressed(Button::Rotate) {
                piece.rotate(&self.board)
            } else {
                false
            };

            if acted {
                self.last_action_ms = now_ms;
                self.render_pending = true;
            }
        }

        if now_ms.saturating_sub(self.last_move_ms) > self.config.move_cooldown_ms {
            self.last_move_ms = now_ms;
            if piece.move_down(&self.board) {
                self.land(io);
            }
            self.render_pending = true;
        }

        self.render(io);
    }

    /// One step of a rapid-fall burst. The burst continues on later ticks
    /// until the piece lands.
    fn rapid_fall_step<B, D, S>(&mut self, now_ms: u64, io: &mut Io<B, D, S>)
    where
        D: GlyphDisplay,
    {
        let Some(piece) = self.active.as_mut() else {
            self.phase = Phase::Playing;
            return;
        };

        if piece.move_down(&self.board) {
            self.land(io);
            self.phase = Phase::Playing;
        } else {
            self.phase = Phase::RapidFall {
                next_step_ms: now_ms + self.config.rapid_fall_step_ms,
            };
        }

        self.render_pending = true;
        self.render(io);
    }

    /// Commit the active piece into the board, clear lines and score.
    fn land<B, D, S>(&mut self, io: &mut Io<B, D, S>)
    where
        D: GlyphDisplay,
    {
        let Some(piece) = self.active.take() else {
            return;
        };

        piece.draw(&mut self.board, true);
        let lines = self.board.clear_lines();
        let points = LANDING_SCORE.saturating_add(lines.saturating_mul(self.config.line_bonus));
        self.score = self.score.saturating_add(points);
        draw_score(&mut io.display, self.score);

        debug!(kind = ?piece.kind(), lines, score = self.score, "landed");
    }

    fn render<B, D, S>(&mut self, io: &mut Io<B, D, S>)
    where
        D: GlyphDisplay,
    {
        if !self.render_pending {
            return;
        }
        self.renderer
            .render(&mut self.board, self.active.as_ref(), &mut io.display);
        self.render_pending = false;
    }

    fn game_over<B, D, S>(&mut self, now_ms: u64, io: &mut Io<B, D, S>)
    where
        D: GlyphDisplay,
        S: ScoreStore,
    {
        let high = io.store.load();
        let score = self.score;
        let (score_mark, high_mark) = match score.cmp(&(high as u32)) {
            std::cmp::Ordering::Less => ("*", ""),
            std::cmp::Ordering::Greater => ("", "*"),
            std::cmp::Ordering::Equal => ("", ""),
        };

        io.display.clear();
        io.display.print(
            0,
            0,
            &format!("Score {:>3}{}", display_score(score), score_mark),
        );
        io.display.print(
            0,
            1,
            &format!("High  {:>3}{}", display_score(high as u32), high_mark),
        );

        if score > high as u32 {
            io.store.store(clamp_high_score(score));
        }

        self.phase = Phase::GameOver {
            until_ms: now_ms + self.config.game_over_hold_ms,
        };
        info!(score, high, "game over");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Saturate a score into the persisted slot's range.
pub fn clamp_high_score(score: u32) -> HighScore {
    HighScore::try_from(score).unwrap_or_else(|_| {
        warn!(score, "score exceeds the high score slot, saturating");
        HighScore::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_score_saturates_instead_of_wrapping() {
        assert_eq!(clamp_high_score(12), 12);
        assert_eq!(clamp_high_score(70_000), HighScore::MAX);
    }

    #[test]
    fn idle_phases() {
        assert!(Phase::AwaitingRestart.is_idle());
        assert!(Phase::GameOver { until_ms: 0 }.is_idle());
        assert!(!Phase::Playing.is_idle());
        assert!(!Phase::RapidFall { next_step_ms: 0 }.is_idle());
    }
}
