//! Board construction parameters.
//!
//! `BoardConfig` carries everything needed to scramble a fresh board.
//! The defaults are the classic setup: a 5x5 board where each cell
//! starts lit with probability 0.7.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Parameters for scrambling a fresh board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (at least 1). Default: 5.
    pub rows: usize,

    /// Number of columns (at least 1). Default: 5.
    pub cols: usize,

    /// Chance that any cell starts lit, in `[0, 1]`. Default: 0.7.
    ///
    /// Cells are sampled independently; a board may come out with any
    /// lit count, including zero.
    pub lit_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            lit_probability: 0.7,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions and the default lit
    /// probability.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Set the chance that any cell starts lit.
    #[must_use]
    pub fn with_lit_probability(mut self, probability: f64) -> Self {
        self.lit_probability = probability;
        self
    }

    /// Check the parameters: at least one row and one column, and a
    /// probability inside `[0, 1]` (NaN is rejected).
    ///
    /// # Errors
    ///
    /// The first violated constraint, as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if !(0.0..=1.0).contains(&self.lit_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.lit_probability));
        }
        Ok(())
    }
}
