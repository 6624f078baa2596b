//! Cell coordinates and neighbor geometry.
//!
//! `Coord` is a plain (row, col) pair with zero-based indices. Neighbor
//! enumeration is orthogonal only - up, down, left, right - because
//! diagonal cells are never part of the flip rule.
//!
//! Coordinates are `usize`, so a candidate that would need a negative
//! index never exists in the first place; callers only filter the high
//! side against their own bounds.
//!
//! ## String form
//!
//! Rendered boards address their cells as `"row-col"` keys, and `Coord`
//! parses the same form back:
//!
//! ```
//! use lights_out::Coord;
//!
//! let coord = Coord::new(2, 3);
//! assert_eq!(coord.to_string(), "2-3");
//! assert_eq!("2-3".parse::<Coord>().unwrap(), coord);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// A cell position: zero-based row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbor candidates in flip order: up, down, left, right.
    ///
    /// Candidates above row 0 or left of column 0 are not representable
    /// and are skipped here. Candidates past the bottom or right edge are
    /// still yielded - only the grid knows where those edges are.
    ///
    /// ```
    /// use lights_out::Coord;
    ///
    /// // A corner has only two representable neighbors.
    /// let corner: Vec<_> = Coord::new(0, 0).neighbors().collect();
    /// assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    ///
    /// // An interior cell has all four.
    /// assert_eq!(Coord::new(2, 2).neighbors().count(), 4);
    /// ```
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let mut out: SmallVec<[Coord; 4]> = SmallVec::new();
        if let Some(row) = self.row.checked_sub(1) {
            out.push(Coord::new(row, self.col));
        }
        out.push(Coord::new(self.row + 1, self.col));
        if let Some(col) = self.col.checked_sub(1) {
            out.push(Coord::new(self.row, col));
        }
        out.push(Coord::new(self.row, self.col + 1));
        out.into_iter()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Failure to parse a `"row-col"` string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCoordError {
    /// No `-` between the row and column parts.
    #[error("expected `row-col`, got `{0}`")]
    MissingSeparator(String),

    /// A part was not a non-negative integer.
    #[error("invalid cell index in `{0}`")]
    InvalidIndex(String),
}

impl std::str::FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('-')
            .ok_or_else(|| ParseCoordError::MissingSeparator(s.to_string()))?;
        let row = row
            .parse()
            .map_err(|_| ParseCoordError::InvalidIndex(s.to_string()))?;
        let col = col
            .parse()
            .map_err(|_| ParseCoordError::InvalidIndex(s.to_string()))?;
        Ok(Self::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let coord = Coord::new(3, 7);
        assert_eq!(coord.row, 3);
        assert_eq!(coord.col, 7);
    }

    #[test]
    fn test_interior_neighbors_in_flip_order() {
        let neighbors: Vec<_> = Coord::new(2, 2).neighbors().collect();
        assert_eq!(
            neighbors,
            vec![
                Coord::new(1, 2), // up
                Coord::new(3, 2), // down
                Coord::new(2, 1), // left
                Coord::new(2, 3), // right
            ]
        );
    }

    #[test]
    fn test_origin_has_no_negative_neighbors() {
        let neighbors: Vec<_> = Coord::new(0, 0).neighbors().collect();
        assert_eq!(neighbors, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn test_top_edge_neighbors() {
        let neighbors: Vec<_> = Coord::new(0, 2).neighbors().collect();
        assert_eq!(
            neighbors,
            vec![Coord::new(1, 2), Coord::new(0, 1), Coord::new(0, 3)]
        );
    }

    #[test]
    fn test_left_edge_neighbors() {
        let neighbors: Vec<_> = Coord::new(2, 0).neighbors().collect();
        assert_eq!(
            neighbors,
            vec![Coord::new(1, 0), Coord::new(3, 0), Coord::new(2, 1)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(0, 0)), "0-0");
        assert_eq!(format!("{}", Coord::new(4, 12)), "4-12");
    }

    #[test]
    fn test_parse_round_trip() {
        let coord = Coord::new(4, 12);
        let parsed: Coord = coord.to_string().parse().unwrap();
        assert_eq!(parsed, coord);
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(
            "23".parse::<Coord>(),
            Err(ParseCoordError::MissingSeparator("23".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_index() {
        assert_eq!(
            "a-1".parse::<Coord>(),
            Err(ParseCoordError::InvalidIndex("a-1".to_string()))
        );
        // A leading minus reads as an empty row part, not a negative index.
        assert_eq!(
            "-1-0".parse::<Coord>(),
            Err(ParseCoordError::InvalidIndex("-1-0".to_string()))
        );
    }

    #[test]
    fn test_from_tuple() {
        let coord: Coord = (1, 2).into();
        assert_eq!(coord, Coord::new(1, 2));
    }

    #[test]
    fn test_serialization() {
        let coord = Coord::new(2, 5);
        let json = serde_json::to_string(&coord).unwrap();
        let deserialized: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, deserialized);
    }
}
