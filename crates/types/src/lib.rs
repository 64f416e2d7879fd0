//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation, the input mapping and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! The default playfield is wider and taller than the guideline one:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 24 rows (indexed 0-23, top to bottom)
//!
//! Both are defaults only. The board takes its size at construction.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SOLO_FALL_MS` | 500 | Gravity interval in single-player mode |
//! | `VERSUS_FALL_MS` | 250 | Gravity interval in two-player mode |
//! | `POLL_MS` | 10 | Upper bound on one loop iteration's input wait |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Cell, Command, PieceKind, DEFAULT_BOARD_WIDTH};
//!
//! let kind = PieceKind::from_char('t').unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(Cell::from(kind), Cell::Block(PieceKind::T));
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!(DEFAULT_BOARD_WIDTH, 12);
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u8 = 12;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u8 = 24;

/// Gravity interval for a single-player game
pub const SOLO_FALL_MS: u32 = 500;

/// Gravity interval for a two-player game
pub const VERSUS_FALL_MS: u32 = 250;

/// Longest the loop waits on input before re-checking the gravity clock
pub const POLL_MS: u32 = 10;

/// Side length of the largest catalog shape (the I piece).
///
/// Boards narrower or shorter than this cannot host every piece.
pub const MAX_SHAPE_SIZE: u8 = 4;

/// Highest line count a single lock can clear with catalog pieces.
pub const MAX_LINES_PER_LOCK: u8 = 4;


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and colour:
/// - **I**: long bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse a piece kind from its identity letter (case-insensitive)
    ///
    /// ```
    /// use falling_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_char('?'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase identity letter
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }
}

/// A cell of a board or of a piece's local grid.
///
/// `Ghost` only ever appears in rendered snapshots; the settled board holds
/// `Empty`, `Block` or `Garbage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Block(PieceKind),
    Ghost,
    Garbage,
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Single-letter tag (`' '` for empty, `'G'` ghost, `'X'` garbage).
    pub fn letter(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Block(kind) => kind.letter(),
            Cell::Ghost => 'G',
            Cell::Garbage => 'X',
        }
    }

    /// Parse a fixture character. `'.'` and `' '` are empty.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Garbage),
            'G' | 'g' => Some(Cell::Ghost),
            other => PieceKind::from_char(other).map(Cell::Block),
        }
    }
}

impl From<PieceKind> for Cell {
    fn from(kind: PieceKind) -> Self {
        Cell::Block(kind)
    }
}

/// Discrete commands the input layer delivers to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down; never locks (gravity does that)
    SoftDrop,
    /// Drop piece to its lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° counter-clockwise
    RotateLeft,
    /// Rotate piece 90° clockwise
    RotateRight,
    /// Leave the game (accepted even after game over)
    Quit,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::HardDrop,
        Command::RotateLeft,
        Command::RotateRight,
        Command::Quit,
    ];

    /// Parse a command from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "rotateleft" => Some(Command::RotateLeft),
            "rotateright" => Some(Command::RotateRight),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
            Command::Quit => "quit",
        }
    }
}

/// Which player of a two-player match a command belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn index(&self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}
