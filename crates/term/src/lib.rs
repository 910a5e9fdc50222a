//! Terminal stand-in for the controller's character LCD.
//!
//! - [`lcd`]: an in-memory 16x2 LCD implementing the engine's display capability
//! - [`lcd_view`]: pure mapping of that LCD into a framebuffer
//! - [`renderer`]: flushes framebuffers to the terminal, sending only changed cells
//!
//! Keeping the panel and its view separate lets the engine drive the panel at
//! its own pace while the host redraws the terminal on its own schedule.

pub mod fb;
pub mod lcd;
pub mod lcd_view;
pub mod renderer;

pub use lcd_tetris_core as core;
pub use lcd_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use lcd::{CharCell, LcdPanel, LcdStats};
pub use lcd_view::{LcdView, PixelMode, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
