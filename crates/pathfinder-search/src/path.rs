//! Search results: [`Path`] and [`PathResult`].

use pathfinder_grid::{Coord, chebyshev};

/// A route from the start cell to the end cell, both included.
///
/// A path always holds at least two cells; deserialising a shorter route
/// fails.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    coords: Vec<Coord>,
    cost: i32,
}

impl Path {
    /// `coords` must hold at least the start and the goal.
    pub(crate) fn new(coords: Vec<Coord>, cost: i32) -> Self {
        debug_assert!(coords.len() >= 2);
        Self { coords, cost }
    }

    /// Every cell of the route in start-to-end order.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// The route without its goal cell: the start followed by every
    /// intermediate cell. This is what a front-end paints.
    #[inline]
    pub fn trail(&self) -> &[Coord] {
        &self.coords[..self.coords.len() - 1]
    }

    /// Number of cells in the full route.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always `false`: a path holds at least its start and goal.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Total octile cost of the route.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    pub fn contains(&self, p: Coord) -> bool {
        self.coords.contains(&p)
    }

    /// Whether every consecutive pair of cells is Moore-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.coords.windows(2).all(|w| chebyshev(w[0], w[1]) == 1)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            coords: Vec<Coord>,
            cost: i32,
        }

        let raw = <Raw as serde::Deserialize>::deserialize(deserializer)?;
        if raw.coords.len() < 2 {
            return Err(serde::de::Error::invalid_length(
                raw.coords.len(),
                &"a route of at least two cells",
            ));
        }
        Ok(Self::new(raw.coords, raw.cost))
    }
}

/// Outcome of a search. Not finding a path is an ordinary result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    Found(Path),
    NotFound,
}

impl PathResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathResult::Found(p) => Some(p),
            PathResult::NotFound => None,
        }
    }

    #[inline]
    pub fn into_path(self) -> Option<Path> {
        match self {
            PathResult::Found(p) => Some(p),
            PathResult::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(i32, i32)], cost: i32) -> Path {
        Path::new(points.iter().map(|&p| Coord::from(p)).collect(), cost)
    }

    #[test]
    fn trail_drops_goal() {
        let p = path(&[(0, 0), (1, 1), (2, 1)], 24);
        assert_eq!(p.trail(), &[Coord::new(0, 0), Coord::new(1, 1)]);
        assert_eq!(p.start(), Coord::new(0, 0));
        assert_eq!(p.goal(), Coord::new(2, 1));
        assert_eq!(p.len(), 3);
        assert!(!p.is_empty());
        assert!(p.contains(Coord::new(1, 1)));
        assert!(!p.contains(Coord::new(1, 0)));
    }

    #[test]
    fn contiguity() {
        assert!(path(&[(0, 0), (1, 1), (2, 1)], 24).is_contiguous());
        assert!(!path(&[(0, 0), (2, 2)], 28).is_contiguous());
        assert!(!path(&[(0, 0), (0, 0)], 0).is_contiguous());
    }

    #[test]
    fn result_accessors() {
        let found = PathResult::Found(path(&[(0, 0), (0, 1)], 10));
        assert!(found.is_found());
        assert_eq!(found.path().map(Path::cost), Some(10));
        assert!(!PathResult::NotFound.is_found());
        assert_eq!(PathResult::NotFound.into_path(), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let res = PathResult::Found(Path::new(vec![Coord::new(0, 0), Coord::new(1, 1)], 14));
        let json = serde_json::to_string(&res).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, res);

        let json = serde_json::to_string(&PathResult::NotFound).unwrap();
        assert_eq!(json, "\"NotFound\"");
    }

    #[test]
    fn short_route_rejected() {
        for json in [
            r#"{"coords":[],"cost":0}"#,
            r#"{"coords":[{"row":0,"col":0}],"cost":0}"#,
        ] {
            assert!(serde_json::from_str::<Path>(json).is_err(), "{json}");
        }
        let res: Result<PathResult, _> =
            serde_json::from_str(r#"{"Found":{"coords":[],"cost":0}}"#);
        assert!(res.is_err());

        let ok: Path =
            serde_json::from_str(r#"{"coords":[{"row":0,"col":0},{"row":0,"col":1}],"cost":10}"#)
                .unwrap();
        assert_eq!(ok.trail(), &[Coord::new(0, 0)]);
        assert_eq!(ok.goal(), Coord::new(0, 1));
    }
}
