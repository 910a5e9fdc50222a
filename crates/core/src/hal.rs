//! Hardware capabilities the engine drives.
//!
//! The engine never touches pins, display controllers or storage directly.
//! A host hands it an [`Io`] bundle implementing three small traits:
//!
//! - [`Buttons`]: logical state of the four input lines
//! - [`GlyphDisplay`]: character LCD with redefinable glyph slots
//! - [`ScoreStore`]: one persisted integer at a fixed slot
//!
//! All three are infallible from the engine's point of view. A host whose
//! backend can fail (file I/O, bus errors) handles that on its side.

use crate::types::{Button, Glyph, HighScore};

/// Read the asserted state of an input line.
pub trait Buttons {
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// Character display with redefinable glyph slots.
pub trait GlyphDisplay {
    /// Blank every character cell.
    fn clear(&mut self);

    /// Redefine the bitmap of glyph `slot`.
    fn define_glyph(&mut self, slot: u8, glyph: &Glyph);

    /// Show glyph `slot` at character cell (`col`, `row`).
    fn write_glyph(&mut self, col: u8, row: u8, slot: u8);

    /// Print text starting at (`col`, `row`). Text past the row end is dropped.
    fn print(&mut self, col: u8, row: u8, text: &str);
}

/// One persisted high-score slot.
pub trait ScoreStore {
    fn load(&mut self) -> HighScore;
    fn store(&mut self, value: HighScore);
}

impl<T: Buttons + ?Sized> Buttons for &mut T {
    fn is_pressed(&mut self, button: Button) -> bool {
        (**self).is_pressed(button)
    }
}

impl<T: GlyphDisplay + ?Sized> GlyphDisplay for &mut T {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) {
        (**self).define_glyph(slot, glyph)
    }

    fn write_glyph(&mut self, col: u8, row: u8, slot: u8) {
        (**self).write_glyph(col, row, slot)
    }

    fn print(&mut self, col: u8, row: u8, text: &str) {
        (**self).print(col, row, text)
    }
}

impl<T: ScoreStore + ?Sized> ScoreStore for &mut T {
    fn load(&mut self) -> HighScore {
        (**self).load()
    }

    fn store(&mut self, value: HighScore) {
        (**self).store(value)
    }
}

/// The peripherals a [`crate::Game`] drives, owned by the host loop.
#[derive(Debug, Default)]
pub struct Io<B, D, S> {
    pub buttons: B,
    pub display: D,
    pub store: S,
}

impl<B, D, S> Io<B, D, S> {
    pub fn new(buttons: B, display: D, store: S) -> Self {
        Self {
            buttons,
            display,
            store,
        }
    }
}

/// Buttons wired idle-high with pull-ups: a line reads asserted when low.
///
/// Wraps a raw level reader (`true` = line high).
pub struct ActiveLow<F> {
    read_level: F,
}

impl<F: FnMut(Button) -> bool> ActiveLow<F> {
    pub fn new(read_level: F) -> Self {
        Self { read_level }
    }
}

impl<F: FnMut(Button) -> bool> Buttons for ActiveLow<F> {
    fn is_pressed(&mut self, button: Button) -> bool {
        !(self.read_level)(button)
    }
}

/// Score slot kept in RAM. Starts at zero unless seeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: HighScore,
    writes: u32,
}

impl MemoryStore {
    pub fn new(value: HighScore) -> Self {
        Self { value, writes: 0 }
    }

    pub fn value(&self) -> HighScore {
        self.value
    }

    /// Number of `store` calls so far
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> HighScore {
        self.value
    }

    fn store(&mut self, value: HighScore) {
        self.value = value;
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_low_inverts_line_level() {
        let mut buttons = ActiveLow::new(|button| button != Button::Rotate);
        assert!(buttons.is_pressed(Button::Rotate));
        assert!(!buttons.is_pressed(Button::Left));
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryStore::new(5);
        assert_eq!(store.load(), 5);
        store.store(9);
        assert_eq!(store.value(), 9);
        assert_eq!(store.writes(), 1);
    }
}
