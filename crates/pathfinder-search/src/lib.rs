//! A* shortest-path search on a [`pathfinder_grid::Grid`].
//!
//! - [`PathFinder::find_path`] runs a whole search and returns a
//!   [`PathResult`]: either a [`Path`] from start to end or `NotFound`.
//! - [`PathFinder::begin`] returns a [`Search`] that can be advanced one
//!   expansion at a time, for animated front-ends.
//! - [`Board`] bundles a grid and a finder behind the toggle / find / reset
//!   calls an interactive front-end makes.
//!
//! Step costs and the heuristic are both the octile distance, so every path
//! returned is a cheapest one.

mod board;
mod error;
mod finder;
mod path;

pub use board::{Board, TRAIL_GLYPH};
pub use error::SearchError;
pub use finder::{PathFinder, Search, SearchStats, Step};
pub use path::{Path, PathResult};
