//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s for the
//! single-player layout and the shared-keyboard versus layout. Bindings are
//! fixed; key releases are ignored.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{should_quit, solo_command, versus_command};
