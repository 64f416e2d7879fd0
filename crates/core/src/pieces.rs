//! Pieces module - tetromino catalog and grid rotation
//!
//! Every piece kind has one canonical square local grid. Rotation is a pure
//! transform of that grid by 90° steps; there is no kick table; a rotation that
//! does not fit is simply refused by the session.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, MAX_SHAPE_SIZE};

/// Storage for the largest (4x4) local grid
const SHAPE_CAPACITY: usize = (MAX_SHAPE_SIZE as usize) * (MAX_SHAPE_SIZE as usize);

/// Canonical grids, indexed by [`PieceKind::index`]. `#` is filled.
const CATALOG: [&[&str]; 7] = [
    // I
    &[".#..", ".#..", ".#..", ".#.."],
    // O
    &["##", "##"],
    // T
    &["...", "###", ".#."],
    // J
    &["...", "###", "..#"],
    // L
    &["...", "###", "#.."],
    // S
    &["...", ".##", "##."],
    // Z
    &["...", "##.", ".##"],
];

/// A square local grid of cells, row-major, `size * size` long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: ArrayVec<Cell, SHAPE_CAPACITY>,
}

impl Shape {
    /// Empty `size` x `size` grid. Returns `None` above the 4x4 capacity.
    pub fn empty(size: u8) -> Option<Self> {
        if size == 0 || size > MAX_SHAPE_SIZE {
            return None;
        }
        Some(Self::blank(size))
    }

    fn blank(size: u8) -> Self {
        let mut cells = ArrayVec::new();
        for _ in 0..(size as usize) * (size as usize) {
            cells.push(Cell::Empty);
        }
        Self { size, cells }
    }

    /// Build a grid from text rows, padding to a square with empty cells.
    ///
    /// `.` and space are empty, `#` becomes `fill`, any other character is
    /// parsed as a cell tag. Rectangular input is padded on the right and
    /// bottom so rotation stays well defined.
    pub fn from_rows(rows: &[&str], fill: Cell) -> Option<Self> {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let size = width.max(rows.len());
        let mut shape = Self::empty(u8::try_from(size).ok()?)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = if ch == '#' { fill } else { Cell::from_char(ch)? };
                shape.set(x as u8, y as u8, cell);
            }
        }
        Some(shape)
    }

    /// Side length of the grid
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline(always)]
    fn index(&self, x: u8, y: u8) -> usize {
        (y as usize) * (self.size as usize) + (x as usize)
    }

    /// Cell at local `(x, y)`; empty outside the grid.
    pub fn get(&self, x: u8, y: u8) -> Cell {
        if x >= self.size || y >= self.size {
            return Cell::Empty;
        }
        self.cells[self.index(x, y)]
    }

    fn set(&mut self, x: u8, y: u8, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Filled cells as `(dx, dy, cell)` local offsets, row by row.
    pub fn filled(&self) -> impl Iterator<Item = (i16, i16, Cell)> + '_ {
        let size = self.size as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_filled())
            .map(move |(i, &cell)| ((i % size) as i16, (i / size) as i16, cell))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Same outline with every filled cell retagged as [`Cell::Ghost`].
    pub fn ghost(&self) -> Self {
        let mut out = self.clone();
        for cell in out.cells.iter_mut().filter(|c| c.is_filled()) {
            *cell = Cell::Ghost;
        }
        out
    }

    /// Rows as text, filled cells by tag letter and empty as `.`.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|y| {
                (0..self.size)
                    .map(|x| match self.get(x, y) {
                        Cell::Empty => '.',
                        other => other.letter(),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Canonical (spawn orientation) shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    let rows = CATALOG[kind.index()];
    let mut shape = Shape::blank(rows.len() as u8);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.bytes().enumerate() {
            if ch == b'#' {
                shape.set(x as u8, y as u8, Cell::Block(kind));
            }
        }
    }
    shape
}

/// Rotate 90° counter-clockwise: `out[y][x] = in[x][n - 1 - y]`.
pub fn rotate_left(shape: &Shape) -> Shape {
    let n = shape.size;
    let mut out = shape.clone();
    for y in 0..n {
        for x in 0..n {
            out.set(x, y, shape.get(n - 1 - y, x));
        }
    }
    out
}

/// Rotate 90° clockwise (three left turns).
pub fn rotate_right(shape: &Shape) -> Shape {
    rotate_left(&rotate_left(&rotate_left(shape)))
}

/// Column where a shape of this size spawns on a board of `board_width`.
pub fn spawn_column(board_width: u8, shape: &Shape) -> i16 {
    (board_width / 2) as i16 - (shape.size() / 2) as i16
}
