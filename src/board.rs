//! The game grid.
//!
//! A [`Board`] is a fixed-size square of cells addressed by `(x, y)` =
//! `(column, row)`. Cells are write-once: a stone, once placed, is never
//! moved or removed.

use std::fmt;

use crate::constants::{BLACK_SYMBOL, EMPTY_SYMBOL, MAX_SIZE, MIN_SIZE, WHITE_SYMBOL};
use crate::error::ConfigError;

/// Stone color. White and Black are the only two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Single-character form used by the console and snapshots.
    pub fn symbol(self) -> char {
        match self {
            Color::White => WHITE_SYMBOL,
            Color::Black => BLACK_SYMBOL,
        }
    }

    /// Case-insensitive: `w`/`W` and `b`/`B`.
    pub fn from_symbol(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            WHITE_SYMBOL => Some(Color::White),
            BLACK_SYMBOL => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of one addressable position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Stone(Color),
    /// Returned for coordinates outside the board.
    OffBoard,
}

/// `(x, y)`, i.e. `(column, row)`.
pub type Point = (usize, usize);

/// An NxN grid of write-once cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an empty board. Sizes outside [`MIN_SIZE`]..=[`MAX_SIZE`] are
    /// rejected.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// State of a cell, or [`Cell::OffBoard`] outside the board.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if !self.in_bounds(x, y) {
            return Cell::OffBoard;
        }
        match self.cells[self.idx(x, y)] {
            Some(color) => Cell::Stone(color),
            None => Cell::Empty,
        }
    }

    /// Place a stone. Returns `false` without touching the board when the
    /// cell is off the board or already occupied.
    pub fn play(&mut self, x: usize, y: usize, color: Color) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.idx(x, y);
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(color);
        true
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All empty cells in row-major order: row 0 first, columns increasing.
    ///
    /// Move selection scans candidates in exactly this order, so it must stay
    /// stable for computer play to be reproducible.
    pub fn free_cells(&self) -> Vec<Point> {
        let mut free = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.cells[self.idx(x, y)].is_none() {
                    free.push((x, y));
                }
            }
        }
        free
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Cell::Stone(color) => color.symbol(),
                    _ => EMPTY_SYMBOL,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
