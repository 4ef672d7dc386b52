//! Terminal rendering module.
//!
//! The engine exposes snapshots; this module turns them into pixels-on-
//! characters. `fb` is a plain styled-cell framebuffer, `view` maps a
//! `GameSnapshot` into it (pure, unit-testable), and `renderer` flushes a
//! framebuffer to the real terminal.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};
