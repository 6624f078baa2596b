//! The Lights Out grid engine.
//!
//! `GridEngine` owns one [`Grid`] and its derived [`GameStatus`], and
//! exposes the three things the puzzle needs:
//!
//! - construction (`new` / `from_grid`)
//! - cell activation (`flip`)
//! - win queries (`status` / `is_won`)
//!
//! ## Flip rule
//!
//! Activating a cell toggles that cell and its orthogonal neighbors. A
//! neighbor that falls off the board is skipped, never clamped, so a flip
//! toggles between 1 and 5 cells depending on where it lands. The win
//! status is recomputed by a full grid scan after every flip; it is never
//! cached across mutations.
//!
//! ## After a win
//!
//! `flip` keeps working once the status is `Won`. The engine models the
//! board, not the session: deciding that a finished puzzle stops taking
//! input is the presentation layer's call, and it does that by no longer
//! forwarding activation events.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use crate::core::{BoardConfig, BoardRng, ConfigError, Coord, FlipError, Grid};

/// Whether the puzzle is solved.
///
/// Derived from the grid, never stored independently of it: `Won` iff
/// every cell is dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one cell is still lit.
    InProgress,
    /// Every cell is dark.
    Won,
}

impl GameStatus {
    /// Check whether this status is `Won`.
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, GameStatus::Won)
    }

    fn of(grid: &Grid) -> Self {
        if grid.is_dark() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

/// Result of a successful flip.
///
/// Carries an owned snapshot of the board so a caller can hold onto the
/// exact post-flip state without re-querying the engine; the snapshot is
/// O(1) thanks to structural sharing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipOutcome {
    /// The board after the flip.
    pub grid: Grid,

    /// Status recomputed after the flip.
    pub status: GameStatus,

    /// Cells this flip toggled, in application order: the activated cell
    /// first, then whichever of its up, down, left, right neighbors exist.
    ///
    /// Lets a renderer redraw only what changed. At most 5 entries, so no
    /// heap allocation.
    pub toggled: SmallVec<[Coord; 5]>,
}

/// Owns the grid state and win status of one Lights Out board.
///
/// The engine is the only mutator of its grid; presentation layers read
/// through [`grid`](GridEngine::grid) or [`snapshot`](GridEngine::snapshot)
/// and feed activation events into [`flip`](GridEngine::flip).
#[derive(Clone, Debug)]
pub struct GridEngine {
    grid: Grid,
    status: GameStatus,
}

impl GridEngine {
    /// Scramble a fresh board from `config`.
    ///
    /// Each cell is sampled independently, lit with probability
    /// `config.lit_probability`, in row-major order from a ChaCha8 stream
    /// seeded with `seed` - so the same `(config, seed)` pair always
    /// produces the same board.
    ///
    /// The status is derived immediately: a board that happens to come
    /// out all dark reports `Won` before any flip.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if a dimension is zero or the probability is
    /// outside `[0, 1]`.
    ///
    /// ```
    /// use lights_out::{BoardConfig, GameStatus, GridEngine};
    ///
    /// // Sampled all dark: already won.
    /// let engine = GridEngine::new(
    ///     BoardConfig::new(3, 3).with_lit_probability(0.0),
    ///     7,
    /// ).unwrap();
    /// assert_eq!(engine.status(), GameStatus::Won);
    ///
    /// // Sampled all lit: a 5x5 game in progress.
    /// let engine = GridEngine::new(
    ///     BoardConfig::default().with_lit_probability(1.0),
    ///     7,
    /// ).unwrap();
    /// assert_eq!(engine.grid().lit_count(), 25);
    /// assert_eq!(engine.status(), GameStatus::InProgress);
    /// ```
    #[instrument(level = "debug", skip(config), fields(rows = config.rows, cols = config.cols))]
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = BoardRng::new(seed);
        let cells = (0..config.rows * config.cols)
            .map(|_| rng.lit(config.lit_probability))
            .collect();
        let grid = Grid::from_parts(config.rows, config.cols, cells);
        let status = GameStatus::of(&grid);

        debug!(lit = grid.lit_count(), ?status, "board scrambled");

        Ok(Self { grid, status })
    }

    /// Adopt an existing board.
    ///
    /// The status is derived from the grid on adoption, so an all-dark
    /// grid is `Won` immediately.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let status = GameStatus::of(&grid);
        Self { grid, status }
    }

    /// Activate the cell at `coord`: toggle it together with its
    /// orthogonal neighbors, then recompute the win status.
    ///
    /// Neighbors that fall off the board are skipped. The primary
    /// coordinate itself must be on the board - a presentation layer only
    /// reports cells it actually rendered, so an out-of-bounds primary is
    /// rejected as a caller bug rather than clamped.
    ///
    /// # Errors
    ///
    /// [`FlipError::OutOfBounds`] if `coord` is not on the board; the
    /// grid is untouched.
    ///
    /// ```
    /// use lights_out::{BoardConfig, Coord, GameStatus, GridEngine};
    ///
    /// let mut engine = GridEngine::new(
    ///     BoardConfig::new(1, 1).with_lit_probability(1.0),
    ///     42,
    /// ).unwrap();
    ///
    /// let outcome = engine.flip(Coord::new(0, 0)).unwrap();
    /// assert_eq!(outcome.status, GameStatus::Won);
    /// assert_eq!(outcome.toggled.len(), 1);
    /// ```
    #[instrument(level = "trace", skip(self), fields(coord = %coord))]
    pub fn flip(&mut self, coord: Coord) -> Result<FlipOutcome, FlipError> {
        if !self.grid.contains(coord) {
            return Err(FlipError::OutOfBounds {
                coord,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            });
        }

        let mut toggled: SmallVec<[Coord; 5]> = SmallVec::new();
        for cell in std::iter::once(coord).chain(coord.neighbors()) {
            if self.grid.contains(cell) {
                self.grid.toggle(cell);
                toggled.push(cell);
            }
        }

        self.status = GameStatus::of(&self.grid);
        trace!(toggled = toggled.len(), status = ?self.status, "cell activated");

        Ok(FlipOutcome {
            grid: self.grid.clone(),
            status: self.status,
            toggled,
        })
    }

    // === Queries ===

    /// The current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// An owned snapshot of the current board.
    ///
    /// O(1) via structural sharing; later flips do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// The current win status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether every cell is dark.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }

    /// Board height.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Board width.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }
}
