//! Grid model for A* pathfinding.
//!
//! A [`Grid`] is a fixed rectangle of [`Cell`]s, each walkable or an
//! obstacle, with exactly one start and one end cell. Cells carry the
//! bookkeeping an A* search writes (`g_cost`, `h_cost`, a parent index);
//! the search itself lives in `pathfinder-search`.
//!
//! - [`Grid::neighbors_of`] enumerates the 8-connected neighbourhood.
//! - [`octile`] is both the step cost and the heuristic: 10 per orthogonal
//!   step, 14 per diagonal step.
//! - [`Grid::retrace_path`] rebuilds a route from parent links.
//! - Grids can be written as text layouts (see [`layout`]) or built from a
//!   [`GridConfig`].

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::{Cell, CellType};
pub use config::GridConfig;
pub use error::{Endpoint, GridError, LayoutError, RetraceError};
pub use geom::{Bounds, Coord, DIAGONAL_COST, STRAIGHT_COST, chebyshev, octile};
pub use grid::{Grid, MAX_CELLS};
