//! Rectangular boolean cell storage.
//!
//! ## Representation
//!
//! Cells are stored row-major in a persistent vector (`im::Vector`), at
//! index `row * cols + col`. Snapshots are O(1) structural-sharing
//! clones, so the engine can hand out an owned copy of the board after
//! every flip without copying cells.
//!
//! The grid is rectangular from construction and is never reshaped.
//!
//! ## Notation
//!
//! `Display` renders one row per line, `O` for a lit cell and `.` for a
//! dark one:
//!
//! ```text
//! . . .
//! O O .
//! . . .
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::ConfigError;

/// A rectangular grid of boolean cells (`true` = lit).
///
/// Mutation is reserved for the engine; everything public here is a
/// query or a conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells, `rows * cols` long.
    cells: Vector<bool>,
}

impl Grid {
    /// Assemble a grid from pre-sampled row-major cells.
    ///
    /// Callers guarantee `cells.len() == rows * cols`; the engine samples
    /// exactly that many.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vector<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Build a grid from the logical array-of-arrays form, row-major.
    ///
    /// Row 0 sets the width; every later row must match it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroRows`] or [`ConfigError::ZeroCols`] for an empty
    /// input, [`ConfigError::RaggedRow`] for a width mismatch.
    ///
    /// ```
    /// use lights_out::Grid;
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec![false, true],
    ///     vec![true, false],
    /// ]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 2);
    /// assert_eq!(grid.lit_count(), 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConfigError> {
        if rows.is_empty() {
            return Err(ConfigError::ZeroRows);
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(ConfigError::ZeroCols);
        }

        let mut cells = Vector::new();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ConfigError::RaggedRow {
                    row: row_idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied());
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Convert back to the logical array-of-arrays form, row-major.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.cells[row * self.cols + col])
                    .collect()
            })
            .collect()
    }

    /// Board height.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check whether a coordinate is on the board.
    ///
    /// The flat index alone cannot answer this: a column past the right
    /// edge would wrap into the next row, so both axes are checked.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// The state of the cell at `coord`, or `None` if off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<bool> {
        if self.contains(coord) {
            self.cells.get(self.index_of(coord)).copied()
        } else {
            None
        }
    }

    /// Invert the cell at `coord`. Callers check bounds first.
    pub(crate) fn toggle(&mut self, coord: Coord) {
        debug_assert!(self.contains(coord));
        let idx = self.index_of(coord);
        let lit = self.cells[idx];
        self.cells.set(idx, !lit);
    }

    /// Whether every cell is dark - the win condition.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &lit)| (Coord::new(idx / cols, idx % cols), lit))
    }

    fn index_of(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                let glyph = if self.cells[row * self.cols + col] {
                    'O'
                } else {
                    '.'
                };
                write!(f, "{}", glyph)?;
            }
        }
        Ok(())
    }
}
