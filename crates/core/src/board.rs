//! Board module - the settled grid
//!
//! The board holds every cell that has locked into place: piece blocks and
//! garbage. The falling piece is never stored here until it locks.
//! Uses a flat row-major vector; the size is fixed at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::pieces::Shape;
use crate::types::{Cell, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// The settled playfield
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; (width as usize) * (height as usize)],
        }
    }

    /// Build a board from text rows (top first), for fixtures and tests.
    ///
    /// Every row must have the same length. Characters follow
    /// [`Cell::from_char`]: `.` empty, `X` garbage, piece letters for blocks.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = u8::try_from(rows.first()?.chars().count()).ok()?;
        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width as usize {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                board.set(x as i16, y as i16, Cell::from_char(ch)?);
            }
        }
        Some(board)
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Row `y` as a slice (empty slice when out of range)
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height as usize {
            return &[];
        }
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height as usize && self.row(y).iter().all(Cell::is_filled)
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Would `shape` placed with its top-left corner at `(x, y)` collide?
    ///
    /// A filled cell collides when it sits left of column 0, right of the last
    /// column, below the last row, or on an occupied cell. Cells above row 0
    /// never collide, so pieces may hang partly above the visible board.
    pub fn is_colliding(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.filled().any(|(dx, dy, _)| {
            let bx = x + dx;
            let by = y + dy;
            if bx < 0 || bx >= self.width as i16 || by >= self.height as i16 {
                return true;
            }
            by >= 0 && self.get(bx, by).is_some_and(|c| c.is_filled())
        })
    }

    /// Write each filled cell of `shape` at `(x, y)` into the grid.
    ///
    /// Callers only merge a placement they have already checked with
    /// [`Board::is_colliding`]. Cells that fall outside the grid (above row 0)
    /// are dropped. Returns the number of cells written.
    pub fn merge(&mut self, shape: &Shape, x: i16, y: i16) -> usize {
        let mut written = 0;
        for (dx, dy, cell) in shape.filled() {
            if self.set(x + dx, y + dy, cell) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row and drop the rest down.
    ///
    /// Non-full rows keep their relative order; as many empty rows as were
    /// removed are inserted at the top. Two-pointer pass, bottom to top.
    /// Returns the number of rows cleared.
    pub fn clear_and_compact(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);
        cleared
    }

    /// Push `count` garbage rows in from the bottom.
    ///
    /// The top `count` rows are discarded and every new row is garbage except
    /// for the `gap` column. `count` is clamped to the board height. Returns
    /// true when a discarded row held any filled cell (the stack overflowed).
    pub fn inject_garbage(&mut self, count: usize, gap: u8) -> bool {
        let width = self.width as usize;
        let count = count.min(self.height as usize);
        if count == 0 {
            return false;
        }

        let overflow = self.cells[..count * width].iter().any(Cell::is_filled);

        self.cells.copy_within(count * width.., 0);
        let start = (self.height as usize - count) * width;
        for (i, cell) in self.cells[start..].iter_mut().enumerate() {
            *cell = if i % width == gap as usize {
                Cell::Empty
            } else {
                Cell::Garbage
            };
        }

        overflow
    }

    /// Rows as text (`.` empty), top first. Handy in assertions.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height as usize)
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|c| match c {
                        Cell::Empty => '.',
                        other => other.letter(),
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}
