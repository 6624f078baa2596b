//! Crate error taxonomy.
//!
//! Both error kinds are caller contract violations, not recoverable
//! runtime conditions:
//!
//! - [`ConfigError`]: invalid construction parameters, surfaced before any
//!   grid is built.
//! - [`FlipError`]: a flip aimed at a coordinate the grid does not contain.
//!
//! Nothing here is transient. No operation performs I/O, so there is no
//! retry story anywhere in the crate.

use thiserror::Error;

use super::coord::Coord;

/// Invalid construction parameters.
///
/// Surfaced by [`GridEngine::new`](crate::GridEngine::new) and
/// [`Grid::from_rows`](crate::Grid::from_rows) before any state exists;
/// construction fails fast rather than clamping values into range.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The board needs at least one row.
    #[error("board must have at least one row")]
    ZeroRows,

    /// The board needs at least one column.
    #[error("board must have at least one column")]
    ZeroCols,

    /// The lit probability must lie in `[0, 1]`. NaN is rejected.
    #[error("lit probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    /// A row handed to [`Grid::from_rows`](crate::Grid::from_rows) did not
    /// match the width set by row 0. Grids are rectangular at all times.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width set by row 0.
        expected: usize,
        /// Cell count actually found.
        found: usize,
    },
}

/// A flip aimed outside the grid.
///
/// Only the primary coordinate is validated; neighbor coordinates that
/// fall off the board are part of the flip rule and are silently skipped.
/// A presentation layer only reports cells it actually rendered, so
/// hitting this error means a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FlipError {
    /// The activated cell is not on the board.
    #[error("coordinate {coord} is outside the {rows}x{cols} board")]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Board height.
        rows: usize,
        /// Board width.
        cols: usize,
    },
}
