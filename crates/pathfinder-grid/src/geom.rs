//! Geometry primitives: [`Coord`] and [`Bounds`], plus the grid distances.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate. Rows grow downwards, columns grow to the right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The rectangle `[0, rows) x [0, cols)` and its row-major flat indexing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` is inside the rectangle.
    #[inline]
    pub fn contains(self, p: Coord) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Coord) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate in the rectangle.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

/// Row-major iterator over the coordinates of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.coord(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.bounds.len().saturating_sub(self.next);
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for BoundsIter {}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

/// Cost of one orthogonal step.
pub const STRAIGHT_COST: i32 = 10;
/// Cost of one diagonal step (sqrt(2) scaled by 10, rounded down).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance: diagonal steps cost 14, orthogonal steps cost 10.
#[inline]
pub fn octile(a: Coord, b: Coord) -> i32 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    DIAGONAL_COST * lo + STRAIGHT_COST * (hi - lo)
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn coord_display() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
    }

    #[test]
    fn bounds_index_round_trip() {
        let b = Bounds::new(3, 4);
        assert_eq!(b.len(), 12);
        assert_eq!(b.index(Coord::new(2, 1)), Some(9));
        assert_eq!(b.coord(9), Coord::new(2, 1));
        assert_eq!(b.index(Coord::new(3, 0)), None);
        assert_eq!(b.index(Coord::new(0, -1)), None);
    }

    #[test]
    fn bounds_iter_row_major() {
        let pts: Vec<Coord> = Bounds::new(2, 2).iter().collect();
        assert_eq!(
            pts,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
        assert_eq!(Bounds::new(0, 5).iter().count(), 0);
    }

    #[test]
    fn octile_costs() {
        let o = Coord::ZERO;
        assert_eq!(octile(o, o), 0);
        assert_eq!(octile(o, Coord::new(0, 1)), 10);
        assert_eq!(octile(o, Coord::new(1, 1)), 14);
        assert_eq!(octile(o, Coord::new(4, 4)), 56);
        // 2 diagonal + 3 straight
        assert_eq!(octile(Coord::new(5, 1), Coord::new(0, 3)), 28 + 30);
        assert_eq!(octile(Coord::new(0, 3), Coord::new(5, 1)), 58);
    }

    #[test]
    fn chebyshev_adjacency() {
        assert_eq!(chebyshev(Coord::new(2, 2), Coord::new(3, 3)), 1);
        assert_eq!(chebyshev(Coord::new(2, 2), Coord::new(2, 4)), 2);
    }
}
