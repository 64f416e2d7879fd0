//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management and simulation logic.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from a scripted piece source
//! - **Portable**: Can run headless, under a terminal, or in a benchmark
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size settled grid with collision, merge, line clear and garbage rows
//! - [`pieces`]: the seven canonical shapes and 90° rotations
//! - [`session`]: one player's game: active piece, gravity, locking, tally
//! - [`versus`]: two sessions that trade garbage rows
//! - [`garbage`]: lines-to-send rule and the per-board incoming queue
//! - [`clock`]: gravity timing driven by the caller's elapsed time
//! - [`rng`]: seeded uniform piece and gap selection
//! - [`snapshot`]: render-ready copy of a session
//! - [`config`]: defaults and `FALLING_BLOCKS_*` environment overrides
//!
//! # Game Rules
//!
//! - **Uniform pieces**: each kind is equally likely on every draw
//! - **No wall kicks**: a rotation that would collide is rejected
//! - **No lock delay**: a piece locks on the first gravity tick it cannot fall
//! - **Ghost piece**: shows where the current piece will land
//! - **Garbage**: clearing `n > 1` lines at once sends `n - 1` rows to the opponent
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{GameConfig, Outcome, PieceSource, Session};
//! use falling_blocks_types::{Command, PieceKind};
//!
//! let config = GameConfig::default();
//! let mut session = Session::new(&config, PieceSource::scripted(7, [PieceKind::O]));
//!
//! session.apply(Command::MoveRight);
//! assert!(matches!(session.apply(Command::HardDrop), Outcome::Locked(_)));
//! assert_eq!(session.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! The simulation has no clock of its own. The loop feeds elapsed time into a
//! [`GravityClock`] and calls [`Session::gravity_tick`] when it fires
//! (every 500ms solo, 250ms in a versus match by default).

pub mod board;
pub mod clock;
pub mod config;
pub mod garbage;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod versus;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::GravityClock;
pub use config::{ConfigError, GameConfig, RotationPolicy};
pub use garbage::{lines_to_send, GarbageQueue};
pub use pieces::{get_shape, rotate_left, rotate_right, Shape};
pub use rng::{PieceSource, SimpleRng};
pub use session::{ActivePiece, LineTally, LockEvent, Outcome, Phase, Session};
pub use snapshot::{ActiveSnapshot, Snapshot};
pub use versus::Versus;
