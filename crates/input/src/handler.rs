//! Keyboard stand-in for the four button lines.
//!
//! The engine polls button levels, but terminals deliver key events, and many
//! never deliver key releases. A key therefore stays asserted until its
//! release event arrives or until a short timeout has passed since its last
//! press/repeat event, whichever comes first.

use crossterm::event::KeyCode;

use crate::core::hal::Buttons;
use crate::map::button_for_key;
use crate::types::Button;

// Matches the engine's input cooldown so one tap yields one action.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks which buttons are held, driven by key events and the host clock.
#[derive(Debug, Clone)]
pub struct KeyboardButtons {
    /// Time of the last press/repeat per button, `None` when released
    last_seen_ms: [Option<u64>; 4],
    now_ms: u64,
    key_release_timeout_ms: u64,
}

impl KeyboardButtons {
    pub fn new() -> Self {
        Self {
            last_seen_ms: [None; 4],
            now_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    /// Advance the clock used for auto-release.
    pub fn update(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Key press or auto-repeat. Returns the button it maps to, if any.
    pub fn handle_key_press(&mut self, code: KeyCode, now_ms: u64) -> Option<Button> {
        let button = button_for_key(code)?;
        self.now_ms = self.now_ms.max(now_ms);
        self.last_seen_ms[button.index()] = Some(now_ms);
        Some(button)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(button) = button_for_key(code) {
            self.last_seen_ms[button.index()] = None;
        }
    }

    /// Drop every held button.
    pub fn reset(&mut self) {
        self.last_seen_ms = [None; 4];
    }

    fn held(&self, button: Button) -> bool {
        match self.last_seen_ms[button.index()] {
            Some(seen) => self.now_ms.saturating_sub(seen) < self.key_release_timeout_ms,
            None => false,
        }
    }
}

impl Default for KeyboardButtons {
    fn default() -> Self {
        Self::new()
    }
}

impl Buttons for KeyboardButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.held(button)
    }
}
