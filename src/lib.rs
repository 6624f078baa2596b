//! # lights-out
//!
//! A Lights Out puzzle engine with deterministic, seedable boards.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns the Board**: Presentation layers never touch cells.
//!    They feed activation events into `GridEngine::flip` and redraw from
//!    the returned `FlipOutcome`.
//!
//! 2. **Status Is Derived**: The win status is recomputed from the grid
//!    after every flip. There is no cached flag to go stale.
//!
//! 3. **Deterministic Scrambles**: Boards are sampled cell by cell from a
//!    seeded ChaCha8 stream, so the same configuration and seed always
//!    produce the same puzzle.
//!
//! ## Architecture
//!
//! - **Persistent Grid**: O(1) board snapshots via `im-rs`. A flip outcome
//!   carries the whole post-flip board without copying cells.
//!
//! - **Skip, Never Clamp**: Neighbor toggles that fall off the board are
//!   dropped, so edge and corner flips toggle 4 and 3 cells instead of 5.
//!
//! ## Modules
//!
//! - `core`: Coordinates, the grid, RNG, configuration, errors
//! - `engine`: The `GridEngine` that ties them into a playable puzzle

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardRng, ConfigError, Coord, FlipError, Grid, ParseCoordError,
};

pub use crate::engine::{FlipOutcome, GameStatus, GridEngine};
