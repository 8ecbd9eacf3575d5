//! Cell contents.

use std::fmt;

/// What occupies a cell: a black (dark) piece, a white (light) piece, or
/// nothing. Black moves first in the standard opening.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    Black,
    White,
    #[default]
    Empty,
}

impl Piece {
    /// The other side.
    ///
    /// # Panics
    /// If called on [`Piece::Empty`].
    #[inline]
    pub fn opposite(self) -> Piece {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
            Piece::Empty => panic!("Piece::Empty has no opposite"),
        }
    }

    /// One-character form used in board dumps.
    pub fn abbrev(self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::White => 'w',
            Piece::Empty => '-',
        }
    }

    /// Lower-case name used in board dumps and driver commands.
    pub fn full_name(self) -> &'static str {
        match self {
            Piece::Black => "black",
            Piece::White => "white",
            Piece::Empty => "empty",
        }
    }

    /// Parse a side name (`black`/`white`, case-insensitive).
    pub fn parse_side(s: &str) -> Option<Piece> {
        if s.eq_ignore_ascii_case("black") {
            Some(Piece::Black)
        } else if s.eq_ignore_ascii_case("white") {
            Some(Piece::White)
        } else {
            None
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}
