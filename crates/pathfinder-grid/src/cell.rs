//! The [`Cell`] type: one grid position with its search bookkeeping.

use crate::geom::Coord;

/// What occupies a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    #[default]
    Walkable,
    Start,
    Obstacle,
    End,
}

impl CellType {
    /// Layout glyph for this type.
    pub const fn glyph(self) -> char {
        match self {
            Self::Walkable => '.',
            Self::Start => 'S',
            Self::Obstacle => '#',
            Self::End => 'E',
        }
    }

    /// Inverse of [`glyph`](CellType::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Walkable),
            'S' => Some(Self::Start),
            '#' => Some(Self::Obstacle),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

/// A grid cell.
///
/// Position and type are owned by the [`Grid`](crate::Grid); only the
/// search bookkeeping is writable from outside. `parent` is a flat index
/// into the grid's cell array and is only meaningful within one search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Coord,
    kind: CellType,
    pub g_cost: i32,
    pub h_cost: i32,
    pub parent: Option<usize>,
}

impl Cell {
    pub(crate) const fn new(pos: Coord, kind: CellType) -> Self {
        Self {
            pos,
            kind,
            g_cost: 0,
            h_cost: 0,
            parent: None,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Coord {
        self.pos
    }

    #[inline]
    pub const fn kind(&self) -> CellType {
        self.kind
    }

    #[inline]
    pub(crate) fn set_kind(&mut self, kind: CellType) {
        self.kind = kind;
    }

    /// `g_cost + h_cost`, recomputed on every read.
    #[inline]
    pub const fn f_cost(&self) -> i32 {
        self.g_cost + self.h_cost
    }

    /// Everything except obstacles can be entered, including start and end.
    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.kind != CellType::Obstacle
    }

    /// Zero the costs and drop the parent link.
    #[inline]
    pub fn clear_search_state(&mut self) {
        self.g_cost = 0;
        self.h_cost = 0;
        self.parent = None;
    }
}
