//! External configuration loader.
//!
//! Reads a TOML file (path from the command line, `LCD_TETRIS_CONFIG`, or
//! `lcd-tetris.toml` in the working directory). Every field is optional and
//! falls back to the engine defaults; a missing default file is not an error.
//!
//! ```toml
//! [timing]
//! input_cooldown_ms = 150
//! move_cooldown_ms = 500
//!
//! [scoring]
//! line_bonus = 10
//!
//! [host]
//! high_score_file = "highscore.json"
//! log_file = "lcd-tetris.log"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::GameConfig;
use crate::types::{
    GAME_OVER_HOLD_MS, INPUT_COOLDOWN_MS, INTRO_MS, LINE_BONUS, MOVE_COOLDOWN_MS,
    RAPID_FALL_STEP_MS,
};

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "LCD_TETRIS_CONFIG";

/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "lcd-tetris.toml";

// ── Public Settings ──

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub game: GameConfig,
    pub host: HostSettings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HostSettings {
    /// Host loop period
    pub tick_ms: u64,
    /// How long a key counts as held after its last press event
    pub key_release_timeout_ms: u64,
    /// JSON file backing the high score slot
    pub high_score_file: PathBuf,
    /// Trace output; logging is off when unset
    pub log_file: Option<PathBuf>,
    /// Fixed shape seed; a time-based seed is used when unset
    pub seed: Option<u32>,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    scoring: TomlScoring,
    #[serde(default)]
    host: TomlHost,
}

#[derive(Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
struct TomlTiming {
    input_cooldown_ms: u64,
    move_cooldown_ms: u64,
    rapid_fall_step_ms: u64,
    intro_ms: u64,
    game_over_hold_ms: u64,
}

#[derive(Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
struct TomlScoring {
    line_bonus: u32,
}

#[derive(Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
struct TomlHost {
    tick_ms: u64,
    key_release_timeout_ms: u64,
    high_score_file: String,
    log_file: Option<String>,
    seed: Option<u32>,
}

// ── Defaults ──

impl Default for TomlTiming {
    fn default() -> Self {
        Self {
            input_cooldown_ms: INPUT_COOLDOWN_MS,
            move_cooldown_ms: MOVE_COOLDOWN_MS,
            rapid_fall_step_ms: RAPID_FALL_STEP_MS,
            intro_ms: INTRO_MS,
            game_over_hold_ms: GAME_OVER_HOLD_MS,
        }
    }
}

impl Default for TomlScoring {
    fn default() -> Self {
        Self {
            line_bonus: LINE_BONUS,
        }
    }
}

impl Default for TomlHost {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            key_release_timeout_ms: INPUT_COOLDOWN_MS,
            high_score_file: "lcd-tetris-highscore.json".into(),
            log_file: None,
            seed: None,
        }
    }
}

impl From<TomlSettings> for Settings {
    fn from(t: TomlSettings) -> Self {
        let game = GameConfig {
            input_cooldown_ms: t.timing.input_cooldown_ms,
            move_cooldown_ms: t.timing.move_cooldown_ms,
            rapid_fall_step_ms: t.timing.rapid_fall_step_ms,
            intro_ms: t.timing.intro_ms,
            game_over_hold_ms: t.timing.game_over_hold_ms,
            line_bonus: t.scoring.line_bonus,
            seed: t.host.seed.unwrap_or(1),
        };
        let host = HostSettings {
            tick_ms: t.host.tick_ms.max(1),
            key_release_timeout_ms: t.host.key_release_timeout_ms,
            high_score_file: PathBuf::from(t.host.high_score_file),
            log_file: t.host.log_file.map(PathBuf::from),
            seed: t.host.seed,
        };
        Self { game, host }
    }
}

impl Default for Settings {
    fn default() -> Self {
        TomlSettings::default().into()
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let parsed: TomlSettings = toml::from_str(text).context("parse settings")?;
        Ok(parsed.into())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings from {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load settings. An explicit path (argument or environment) must exist;
    /// the default file in the working directory is optional.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self> {
        let explicit = explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match explicit {
            Some(path) => Self::from_file(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
