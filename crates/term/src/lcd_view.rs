//! LcdView: draws an [`LcdPanel`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Glyph pixels are drawn with half-block characters (one terminal cell per
//! pixel column, two pixel rows per terminal row). When the terminal is too
//! narrow for that, Braille patterns pack 2x4 pixels into one terminal cell.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::lcd::{CharCell, LcdPanel};
use crate::types::{GLYPH_COLUMNS, GLYPH_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// How glyph pixels map onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    /// 1x2 pixels per terminal cell
    HalfBlock,
    /// 2x4 pixels per terminal cell
    Braille,
}

impl PixelMode {
    /// Terminal cells covered by one LCD character, (width, height).
    fn char_size(self) -> (u16, u16) {
        let (cols, rows) = (GLYPH_COLUMNS as u16, GLYPH_ROWS as u16);
        match self {
            PixelMode::HalfBlock => (cols, rows.div_ceil(2)),
            PixelMode::Braille => (cols.div_ceil(2), rows.div_ceil(4)),
        }
    }
}

const LIT: Rgb = Rgb::new(20, 40, 20);
const UNLIT: Rgb = Rgb::new(120, 170, 60);
const BEZEL: Rgb = Rgb::new(60, 60, 70);

/// Renders the emulated LCD, centered, with a bezel and a status line.
#[derive(Debug, Clone, Default)]
pub struct LcdView {
    mode: Option<PixelMode>,
}

impl LcdView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the pixel mode instead of picking one from the viewport width.
    pub fn with_mode(mut self, mode: PixelMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Size of the bezel-framed panel for `mode`, (width, height).
    pub fn frame_size(panel: &LcdPanel, mode: PixelMode) -> (u16, u16) {
        let (cw, ch) = mode.char_size();
        let cols = panel.columns() as u16;
        let rows = panel.rows() as u16;
        // One cell gap between characters, one cell of margin inside the bezel.
        let w = cols * (cw + 1) - 1 + 4;
        let h = rows * (ch + 1) - 1 + 4;
        (w, h)
    }

    fn pick_mode(&self, panel: &LcdPanel, viewport: Viewport) -> PixelMode {
        self.mode.unwrap_or_else(|| {
            let (w, h) = Self::frame_size(panel, PixelMode::HalfBlock);
            if w <= viewport.width && h < viewport.height {
                PixelMode::HalfBlock
            } else {
                PixelMode::Braille
            }
        })
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, panel: &LcdPanel, status: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::default().cell(' '));

        let mode = self.pick_mode(panel, viewport);
        let (frame_w, frame_h) = Self::frame_size(panel, mode);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        let bezel = CellStyle::new(Rgb::new(200, 200, 200), BEZEL);
        let glass = CellStyle::new(LIT, UNLIT);

        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', bezel);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', glass);

        let (cw, ch) = mode.char_size();
        for row in 0..panel.rows() {
            for col in 0..panel.columns() {
                let x = start_x + 2 + col as u16 * (cw + 1);
                let y = start_y + 2 + row as u16 * (ch + 1);
                self.draw_char(fb, panel, col, row, x, y, mode, glass);
            }
        }

        let status_x = viewport.width.saturating_sub(status.chars().count() as u16) / 2;
        fb.put_str(status_x, start_y + frame_h + 1, status, CellStyle::default());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, panel: &LcdPanel, status: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(panel, status, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_char(
        &self,
        fb: &mut FrameBuffer,
        panel: &LcdPanel,
        col: u8,
        row: u8,
        x: u16,
        y: u16,
        mode: PixelMode,
        style: CellStyle,
    ) {
        let (cw, ch) = mode.char_size();
        match panel.cell(col, row) {
            CharCell::Blank => {}
            CharCell::Text(c) => fb.put_char(x + cw / 2, y + ch / 2, c, style.bold()),
            CharCell::Glyph(_) => {
                for ty in 0..ch {
                    for tx in 0..cw {
                        let c = match mode {
                            PixelMode::HalfBlock => half_block(panel, col, row, tx as u8, ty as u8),
                            PixelMode::Braille => braille(panel, col, row, tx as u8, ty as u8),
                        };
                        fb.put_char(x + tx, y + ty, c, style);
                    }
                }
            }
        }
    }
}

fn half_block(panel: &LcdPanel, col: u8, row: u8, tx: u8, ty: u8) -> char {
    let top = panel.pixel(col, row, tx, ty * 2);
    let bottom = panel.pixel(col, row, tx, ty * 2 + 1);
    match (top, bottom) {
        (false, false) => ' ',
        (true, false) => '▀',
        (false, true) => '▄',
        (true, true) => '█',
    }
}

/// Dot bit of Braille pattern position (dx, dy), dx in 0..2, dy in 0..4.
const BRAILLE_DOTS: [[u32; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

fn braille(panel: &LcdPanel, col: u8, row: u8, tx: u8, ty: u8) -> char {
    let mut bits = 0;
    for (dx, column) in BRAILLE_DOTS.iter().enumerate() {
        for (dy, bit) in column.iter().enumerate() {
            if panel.pixel(col, row, tx * 2 + dx as u8, ty * 4 + dy as u8) {
                bits |= bit;
            }
        }
    }
    char::from_u32(0x2800 + bits).unwrap_or(' ')
}
