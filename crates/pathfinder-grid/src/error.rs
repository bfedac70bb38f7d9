//! Error types for grid construction, mutation, parsing and path retracing.

use thiserror::Error;

use crate::geom::Coord;

/// Which of the two reserved cells an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Invalid grid construction or a rejected cell mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("{which} cell {pos} lies outside the {rows}x{cols} grid")]
    EndpointOutOfBounds {
        which: Endpoint,
        pos: Coord,
        rows: i32,
        cols: i32,
    },

    #[error("start and end share the cell {0}")]
    StartEqualsEnd(Coord),

    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Coord),

    #[error("cell {0} is reserved for the start or end")]
    Reserved(Coord),
}

/// Failure to parse a textual grid layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Coord },

    #[error("layout has no {0} cell")]
    Missing(Endpoint),

    #[error("layout has a second {which} cell at {pos}")]
    Duplicate { which: Endpoint, pos: Coord },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// The parent chain did not lead back to the start cell.
///
/// Never produced by a correct search; it signals corrupted bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetraceError {
    #[error("parent chain broken at {at} before reaching {start}")]
    BrokenChain { at: Coord, start: Coord },

    #[error("parent chain from {end} exceeded {limit} cells without reaching {start}")]
    BoundExceeded { start: Coord, end: Coord, limit: usize },

    #[error("retrace endpoint {0} lies outside the grid")]
    OutOfBounds(Coord),
}
