//! Core board types: coordinates, the grid, RNG, configuration, errors.
//!
//! Everything here is presentation-agnostic. The engine in
//! [`crate::engine`] composes these into the playable puzzle.

pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::BoardConfig;
pub use coord::{Coord, ParseCoordError};
pub use error::{ConfigError, FlipError};
pub use grid::Grid;
pub use rng::BoardRng;
