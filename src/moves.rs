//! Move representation and the `a1-b2` text form.

use std::fmt;
use std::str::FromStr;

use crate::square::{ParseSquareError, Square};

/// A move from one square to another.
///
/// The capture flag is bookkeeping for [`Board::retract`](crate::board::Board::retract):
/// the board sets it when the move lands on an opposing piece. It does not
/// show up in the text form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    capture: bool,
}

/// Error from parsing move text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    /// Text is not two squares joined by `-`.
    #[error("malformed move `{0}`: expected <square>-<square>, e.g. f3-d5")]
    Malformed(String),
    /// One side of the `-` is not a square.
    #[error(transparent)]
    Square(#[from] ParseSquareError),
}

impl Move {
    /// A non-capturing move.
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            capture: false,
        }
    }

    /// A capturing move.
    pub fn capture(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            capture: true,
        }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// Number of cells travelled, or `None` if origin and destination do
    /// not share a straight or diagonal line.
    pub fn length(&self) -> Option<usize> {
        self.from
            .direction_to(self.to)
            .map(|_| self.from.distance(self.to))
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((from, to)) = s.split_once('-') else {
            return Err(ParseMoveError::Malformed(s.to_string()));
        };
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
