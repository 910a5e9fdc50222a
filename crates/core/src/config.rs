//! Engine tuning knobs. Hosts fill these from their own settings source.

use crate::types::{
    GAME_OVER_HOLD_MS, INPUT_COOLDOWN_MS, INTRO_MS, LINE_BONUS, MOVE_COOLDOWN_MS,
    RAPID_FALL_STEP_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Minimum gap between left/right/rotate actions
    pub input_cooldown_ms: u64,
    /// Gravity step interval
    pub move_cooldown_ms: u64,
    /// Delay between the steps of a rapid-fall burst
    pub rapid_fall_step_ms: u64,
    /// Title screen hold
    pub intro_ms: u64,
    /// Final score screen hold
    pub game_over_hold_ms: u64,
    /// Bonus points per cleared line
    pub line_bonus: u32,
    /// Seed for shape selection
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            input_cooldown_ms: INPUT_COOLDOWN_MS,
            move_cooldown_ms: MOVE_COOLDOWN_MS,
            rapid_fall_step_ms: RAPID_FALL_STEP_MS,
            intro_ms: INTRO_MS,
            game_over_hold_ms: GAME_OVER_HOLD_MS,
            line_bonus: LINE_BONUS,
            seed: 1,
        }
    }
}
