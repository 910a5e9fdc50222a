//! LcdPanel: an in-memory 16x2 character LCD with eight custom glyphs.
//!
//! Behaves like the common HD44780-style controllers the engine targets:
//! character memory holds either a printable character or a glyph slot
//! number, and glyph RAM is shared, so redefining a slot changes every cell
//! currently showing it. `clear` blanks character memory but keeps glyph RAM.

use crate::core::hal::GlyphDisplay;
use crate::types::{Glyph, GLYPH_COLUMNS, GLYPH_ROWS, GLYPH_SLOTS, LCD_COLUMNS, LCD_ROWS};

const COLS: usize = LCD_COLUMNS as usize;
const ROWS: usize = LCD_ROWS as usize;

/// Contents of one character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharCell {
    #[default]
    Blank,
    Text(char),
    Glyph(u8),
}

/// Bus traffic counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LcdStats {
    pub clears: u64,
    pub glyph_defines: u64,
    pub glyph_writes: u64,
    pub chars_printed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcdPanel {
    cells: [[CharCell; COLS]; ROWS],
    glyphs: [Glyph; GLYPH_SLOTS],
    stats: LcdStats,
}

impl LcdPanel {
    pub fn new() -> Self {
        Self {
            cells: [[CharCell::Blank; COLS]; ROWS],
            glyphs: [[0; GLYPH_ROWS]; GLYPH_SLOTS],
            stats: LcdStats::default(),
        }
    }

    pub fn columns(&self) -> u8 {
        LCD_COLUMNS
    }

    pub fn rows(&self) -> u8 {
        LCD_ROWS
    }

    pub fn cell(&self, col: u8, row: u8) -> CharCell {
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or_default()
    }

    pub fn glyph(&self, slot: u8) -> &Glyph {
        &self.glyphs[slot as usize % GLYPH_SLOTS]
    }

    pub fn stats(&self) -> LcdStats {
        self.stats
    }

    /// Whether pixel (`px`, `py`) of cell (`col`, `row`) is lit. Only glyph
    /// cells have addressable pixels.
    pub fn pixel(&self, col: u8, row: u8, px: u8, py: u8) -> bool {
        if px >= GLYPH_COLUMNS || py as usize >= GLYPH_ROWS {
            return false;
        }
        match self.cell(col, row) {
            CharCell::Glyph(slot) => {
                self.glyph(slot)[py as usize] & (1 << (GLYPH_COLUMNS - 1 - px)) != 0
            }
            _ => false,
        }
    }

    /// Character memory as text: glyph cells show their slot digit.
    pub fn text_row(&self, row: u8) -> String {
        (0..LCD_COLUMNS)
            .map(|col| match self.cell(col, row) {
                CharCell::Blank => ' ',
                CharCell::Text(ch) => ch,
                CharCell::Glyph(slot) => char::from(b'0' + slot),
            })
            .collect()
    }

    fn cell_mut(&mut self, col: u8, row: u8) -> Option<&mut CharCell> {
        self.cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
    }
}

impl Default for LcdPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphDisplay for LcdPanel {
    fn clear(&mut self) {
        self.cells = [[CharCell::Blank; COLS]; ROWS];
        self.stats.clears += 1;
    }

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) {
        // Glyph RAM is addressed with three bits.
        self.glyphs[slot as usize % GLYPH_SLOTS] = *glyph;
        self.stats.glyph_defines += 1;
    }

    fn write_glyph(&mut self, col: u8, row: u8, slot: u8) {
        if let Some(cell) = self.cell_mut(col, row) {
            *cell = CharCell::Glyph(slot % GLYPH_SLOTS as u8);
        }
        self.stats.glyph_writes += 1;
    }

    fn print(&mut self, col: u8, row: u8, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            let Some(cell) = self.cell_mut(col.saturating_add(i as u8), row) else {
                break;
            };
            // The character ROM only covers printable ASCII.
            *cell = if ch == ' ' {
                CharCell::Blank
            } else if ch.is_ascii_graphic() {
                CharCell::Text(ch)
            } else {
                CharCell::Text('?')
            };
            self.stats.chars_printed += 1;
        }
    }
}
