//! Board coordinates.
//!
//! A [`Square`] is a plain value naming one of the 64 cells. Columns are
//! files `a`-`h` (0-7) and rows are ranks `1`-`8` (0-7), so `a1` is index 0
//! and `h8` is index 63. Squares compare by value and are `Copy`, so there
//! is exactly one identity per coordinate.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, DELTA, NUM_SQUARES};

/// One of the 8 straight or diagonal directions a piece can travel in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, in the same order as [`DELTA`].
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Column and row step of one move in this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        DELTA[self as usize]
    }

    /// The direction pointing the other way.
    #[inline]
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 4) % 8]
    }

    /// Direction matching a unit step, if any.
    fn from_step(dcol: isize, drow: isize) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.delta() == (dcol, drow))
    }
}

/// A cell on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// The square at (`col`, `row`), or `None` if it is off the board.
    pub fn at(col: usize, row: usize) -> Option<Square> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Square((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    /// The square at (`col`, `row`).
    ///
    /// # Panics
    /// If either coordinate is outside `0..8`.
    pub fn new(col: usize, row: usize) -> Square {
        match Square::at(col, row) {
            Some(sq) => sq,
            None => panic!("square ({col}, {row}) is off the board"),
        }
    }

    /// The square with linear index `index` (`row * 8 + col`).
    pub fn from_index(index: usize) -> Option<Square> {
        (index < NUM_SQUARES).then_some(Square(index as u8))
    }

    /// Linear index `row * 8 + col`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// All 64 squares in row-major order (a1, b1, ..., h1, a2, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }

    /// The square `steps` cells away in direction `dir`, or `None` if that
    /// would leave the board.
    pub fn move_dest(self, dir: Direction, steps: usize) -> Option<Square> {
        let (dc, dr) = dir.delta();
        let steps = steps as isize;
        let col = self.col() as isize + dc * steps;
        let row = self.row() as isize + dr * steps;
        if col < 0 || row < 0 {
            return None;
        }
        Square::at(col as usize, row as usize)
    }

    /// The up-to-8 on-board squares touching this one (edges and corners).
    pub fn adjacent(self) -> impl Iterator<Item = Square> {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.move_dest(d, 1))
    }

    /// Direction of travel from `self` to `other` when both lie on one
    /// straight or diagonal line. `None` for other offsets and for
    /// `self == other`.
    pub fn direction_to(self, other: Square) -> Option<Direction> {
        let dc = other.col() as isize - self.col() as isize;
        let dr = other.row() as isize - self.row() as isize;
        if (dc, dr) == (0, 0) {
            return None;
        }
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return None;
        }
        Direction::from_step(dc.signum(), dr.signum())
    }

    /// Chebyshev distance between two squares.
    pub fn distance(self, other: Square) -> usize {
        self.col()
            .abs_diff(other.col())
            .max(self.row().abs_diff(other.row()))
    }
}

/// Error returned when text does not name a square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square `{0}`: expected a file a-h followed by a rank 1-8")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(err());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(err());
        }
        Ok(Square::new((file - b'a') as usize, (rank - b'1') as usize))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col() as u8) as char;
        write!(f, "{file}{}", self.row() + 1)
    }
}
