//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: boards are drawn into a
//! framebuffer of styled glyphs, and the framebuffer is flushed to the
//! terminal with crossterm, diffing against the previous frame.
//!
//! Every board cell is two columns wide (`[]`), which roughly squares up the
//! usual terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{footprint, AnchorY, BoardView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
