//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use lcd_tetris::core::{Buttons, GlyphDisplay, Io, MemoryStore};
use lcd_tetris::types::{Button, Glyph};

/// Records every display call.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub defines: Vec<(u8, Glyph)>,
    pub writes: Vec<(u8, u8, u8)>,
    pub prints: Vec<(u8, u8, String)>,
    pub clears: usize,
}

impl RecordingDisplay {
    /// Forget recorded glyph traffic (prints and clears are kept).
    pub fn reset_glyph_log(&mut self) {
        self.defines.clear();
        self.writes.clear();
    }

    /// All printed text, in call order.
    pub fn printed(&self) -> Vec<&str> {
        self.prints.iter().map(|(_, _, s)| s.as_str()).collect()
    }
}

impl GlyphDisplay for RecordingDisplay {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) {
        self.defines.push((slot, *glyph));
    }

    fn write_glyph(&mut self, col: u8, row: u8, slot: u8) {
        self.writes.push((col, row, slot));
    }

    fn print(&mut self, col: u8, row: u8, text: &str) {
        self.prints.push((col, row, text.to_string()));
    }
}

/// Buttons held down until released by the test.
#[derive(Debug, Default)]
pub struct HeldButtons {
    held: [bool; 4],
}

impl HeldButtons {
    pub fn press(&mut self, button: Button) {
        self.held[button.index()] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.held[button.index()] = false;
    }

    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }
}

impl Buttons for HeldButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.held[button.index()]
    }
}

pub type TestIo = Io<HeldButtons, RecordingDisplay, MemoryStore>;

pub fn test_io() -> TestIo {
    Io::new(
        HeldButtons::default(),
        RecordingDisplay::default(),
        MemoryStore::default(),
    )
}
