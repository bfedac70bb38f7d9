//! The [`Grid`] type: a fixed rectangle of [`Cell`]s with a designated
//! start and end.
//!
//! Cells live in one row-major `Vec`; the parent links written by a search
//! are indices into it, so retracing never chases references.

use crate::cell::{Cell, CellType};
use crate::error::{Endpoint, GridError, RetraceError};
use crate::geom::{self, Bounds, Coord};

/// Largest number of cells a [`Grid`] may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// A rectangular pathfinding grid.
///
/// Exactly one cell is [`CellType::Start`] and exactly one is
/// [`CellType::End`]; both are fixed at construction and no mutation
/// offered here can change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
    start: Coord,
    end: Coord,
}

impl Grid {
    /// Create a grid of walkable cells with the given start and end.
    ///
    /// Fails if a dimension is not positive, if the grid would exceed
    /// [`MAX_CELLS`], if either endpoint is out of bounds, or if both
    /// endpoints are the same cell.
    pub fn new(rows: i32, cols: i32, start: Coord, end: Coord) -> Result<Self, GridError> {
        let too_large = (rows as usize)
            .checked_mul(cols as usize)
            .is_none_or(|n| n > MAX_CELLS);
        if rows <= 0 || cols <= 0 || too_large {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let bounds = Bounds::new(rows, cols);
        for (which, pos) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !bounds.contains(pos) {
                return Err(GridError::EndpointOutOfBounds {
                    which,
                    pos,
                    rows,
                    cols,
                });
            }
        }
        if start == end {
            return Err(GridError::StartEqualsEnd(start));
        }

        let cells = bounds
            .iter()
            .map(|p| {
                let kind = if p == start {
                    CellType::Start
                } else if p == end {
                    CellType::End
                } else {
                    CellType::Walkable
                };
                Cell::new(p, kind)
            })
            .collect();

        Ok(Self {
            bounds,
            cells,
            start,
            end,
        })
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Flat index of the start cell.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.flat(self.start)
    }

    /// Flat index of the end cell.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.flat(self.end)
    }

    // Only for coordinates already known to be in bounds.
    #[inline]
    fn flat(&self, p: Coord) -> usize {
        p.row as usize * self.bounds.cols as usize + p.col as usize
    }

    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index_of(&self, p: Coord) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Coordinate of a flat index.
    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        self.bounds.coord(idx)
    }

    /// The cell at `p`, or `None` outside the grid.
    pub fn cell(&self, p: Coord) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// The type of the cell at `p`, or `None` outside the grid.
    pub fn kind(&self, p: Coord) -> Option<CellType> {
        self.cell(p).map(Cell::kind)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All cells in row-major order, for writing search bookkeeping.
    ///
    /// Cell types cannot be changed through this slice.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Whether `p` is the start or the end cell.
    #[inline]
    pub fn is_reserved(&self, p: Coord) -> bool {
        p == self.start || p == self.end
    }

    /// Append the in-bounds Moore neighbours of `p` into `buf`.
    ///
    /// Order is row-major over the surrounding 3x3 block. The caller clears
    /// `buf` before calling.
    pub fn neighbors_of(&self, p: Coord, buf: &mut Vec<Coord>) {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let n = p.shift(dr, dc);
                if self.bounds.contains(n) {
                    buf.push(n);
                }
            }
        }
    }

    /// Octile distance between two coordinates.
    #[inline]
    pub fn distance(&self, a: Coord, b: Coord) -> i32 {
        geom::octile(a, b)
    }

    /// Follow parent links from `end` back to `start`.
    ///
    /// Returns the route in start-to-end order, both endpoints included.
    /// The walk is capped at [`len`](Grid::len) cells.
    pub fn retrace_path(&self, start: Coord, end: Coord) -> Result<Vec<Coord>, RetraceError> {
        let start_idx = self.index_of(start).ok_or(RetraceError::OutOfBounds(start))?;
        let mut ci = self.index_of(end).ok_or(RetraceError::OutOfBounds(end))?;
        let limit = self.cells.len();

        let mut path = Vec::new();
        loop {
            path.push(self.cells[ci].pos());
            if ci == start_idx {
                break;
            }
            if path.len() >= limit {
                return Err(RetraceError::BoundExceeded { start, end, limit });
            }
            match self.cells[ci].parent {
                Some(pi) if pi < limit => ci = pi,
                _ => {
                    return Err(RetraceError::BrokenChain {
                        at: self.cells[ci].pos(),
                        start,
                    });
                }
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Index of a cell whose type may be changed.
    fn mutable_index(&self, p: Coord) -> Result<usize, GridError> {
        let i = self.index_of(p).ok_or(GridError::OutOfBounds(p))?;
        if self.is_reserved(p) {
            log::debug!("refusing to change reserved cell {p}");
            return Err(GridError::Reserved(p));
        }
        Ok(i)
    }

    /// Flip `p` between walkable and obstacle. Returns the new type.
    pub fn toggle_obstacle(&mut self, p: Coord) -> Result<CellType, GridError> {
        let i = self.mutable_index(p)?;
        let cell = &mut self.cells[i];
        let next = match cell.kind() {
            CellType::Obstacle => CellType::Walkable,
            _ => CellType::Obstacle,
        };
        cell.set_kind(next);
        Ok(next)
    }

    /// Make `p` an obstacle (`true`) or walkable (`false`).
    pub fn set_obstacle(&mut self, p: Coord, blocked: bool) -> Result<(), GridError> {
        let i = self.mutable_index(p)?;
        let kind = if blocked {
            CellType::Obstacle
        } else {
            CellType::Walkable
        };
        self.cells[i].set_kind(kind);
        Ok(())
    }

    /// Coordinates of every obstacle, row-major.
    pub fn obstacles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|c| c.kind() == CellType::Obstacle)
            .map(Cell::pos)
    }

    /// Clear costs and parent links on every cell.
    pub fn clear_search_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.clear_search_state();
        }
    }

    /// Turn every non-reserved cell walkable and clear all search state.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            if c.kind() == CellType::Obstacle {
                c.set_kind(CellType::Walkable);
            }
            c.clear_search_state();
        }
    }
}
