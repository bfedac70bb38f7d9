//! A* search over a [`Grid`].
//!
//! The open list is a plain `Vec` scanned linearly: the cell with the lowest
//! `f_cost` wins, ties go to the lower `h_cost`, and remaining ties to the
//! cell discovered first. Expanded cells are closed for good, and a
//! neighbour already on the open list is only updated on a strict
//! improvement of its `g_cost`. Both rules fix the exact route chosen on
//! tie-heavy grids.

use pathfinder_grid::{CellType, Coord, Grid, octile};

use crate::error::SearchError;
use crate::path::{Path, PathResult};

/// Counters for the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells taken off the open list, the goal included.
    pub expanded: usize,
    /// Cells ever placed on the open list, the start included.
    pub discovered: usize,
}

/// One iteration of a [`Search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A cell was closed and its neighbours relaxed.
    Expanded(Coord),
    /// The search is over.
    Finished(PathResult),
}

/// Reusable A* engine.
///
/// `PathFinder` keeps its open list and membership tables between searches
/// so that repeated queries on a same-sized grid do not reallocate.
#[derive(Debug, Default)]
pub struct PathFinder {
    open: Vec<usize>,
    in_open: Vec<bool>,
    closed: Vec<bool>,
    nbuf: Vec<Coord>,
    stats: SearchStats,
}

impl PathFinder {
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(8),
            ..Self::default()
        }
    }

    /// Start a search from the grid's start cell to its end cell.
    ///
    /// Clears every cell's costs and parent link, so nothing from a previous
    /// run can leak into this one. The grid stays exclusively borrowed until
    /// the returned session is dropped.
    pub fn begin<'a>(&'a mut self, grid: &'a mut Grid) -> Search<'a> {
        let len = grid.len();
        self.open.clear();
        self.in_open.clear();
        self.in_open.resize(len, false);
        self.closed.clear();
        self.closed.resize(len, false);
        self.stats = SearchStats::default();

        grid.clear_search_state();

        let start_idx = grid.start_index();
        self.open.push(start_idx);
        self.in_open[start_idx] = true;
        self.stats.discovered = 1;

        log::debug!(
            "astar: {} -> {} on {}x{} grid",
            grid.start(),
            grid.end(),
            grid.rows(),
            grid.cols()
        );

        Search {
            end_idx: grid.end_index(),
            finder: self,
            grid,
            finished: None,
        }
    }

    /// Run a complete search.
    ///
    /// `Ok(PathResult::NotFound)` means the end is unreachable; `Err` means
    /// the parent links could not be retraced.
    pub fn find_path(&mut self, grid: &mut Grid) -> Result<PathResult, SearchError> {
        let mut search = self.begin(grid);
        loop {
            if let Step::Finished(result) = search.step()? {
                return Ok(result);
            }
        }
    }

    /// Counters of the last search started with this finder.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }
}

/// An in-flight search, advanced one expansion at a time.
pub struct Search<'a> {
    finder: &'a mut PathFinder,
    grid: &'a mut Grid,
    end_idx: usize,
    finished: Option<PathResult>,
}

impl Search<'_> {
    /// Expand the best open cell.
    ///
    /// Once the search has finished, every further call returns the same
    /// [`Step::Finished`] result.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        if let Some(result) = &self.finished {
            return Ok(Step::Finished(result.clone()));
        }

        let Some(best) = self.select() else {
            log::debug!(
                "astar: no path, {} cells expanded",
                self.finder.stats.expanded
            );
            return Ok(self.finish(PathResult::NotFound));
        };

        let finder = &mut *self.finder;
        let grid = &mut *self.grid;

        let ci = finder.open.remove(best);
        finder.in_open[ci] = false;
        finder.closed[ci] = true;
        finder.stats.expanded += 1;

        let current = grid.cells()[ci];
        log::trace!(
            "astar: expand {} g={} h={}",
            current.pos(),
            current.g_cost,
            current.h_cost
        );

        if ci == self.end_idx || current.kind() == CellType::End {
            let coords = match grid.retrace_path(grid.start(), current.pos()) {
                Ok(coords) => coords,
                Err(e) => {
                    log::error!("astar: {e}");
                    return Err(e.into());
                }
            };
            log::debug!(
                "astar: path of {} cells, cost {}, {} cells expanded",
                coords.len(),
                current.g_cost,
                finder.stats.expanded
            );
            let path = Path::new(coords, current.g_cost);
            return Ok(self.finish(PathResult::Found(path)));
        }

        let end = grid.end();
        let mut nbuf = std::mem::take(&mut finder.nbuf);
        nbuf.clear();
        grid.neighbors_of(current.pos(), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = grid.index_of(np) else {
                continue;
            };
            if finder.closed[ni] {
                continue;
            }
            let n = &mut grid.cells_mut()[ni];
            if !n.is_walkable() {
                continue;
            }

            let tentative_g = current.g_cost + octile(current.pos(), np);
            if tentative_g < n.g_cost || !finder.in_open[ni] {
                n.g_cost = tentative_g;
                n.h_cost = octile(np, end);
                n.parent = Some(ci);

                if !finder.in_open[ni] {
                    finder.in_open[ni] = true;
                    finder.open.push(ni);
                    finder.stats.discovered += 1;
                }
            }
        }

        finder.nbuf = nbuf;
        Ok(Step::Expanded(current.pos()))
    }

    /// Position in the open list of the next cell to expand.
    fn select(&self) -> Option<usize> {
        let cells = self.grid.cells();
        let mut best: Option<(usize, i32, i32)> = None;
        for (pos, &idx) in self.finder.open.iter().enumerate() {
            let c = &cells[idx];
            let (f, h) = (c.f_cost(), c.h_cost);
            match best {
                Some((_, bf, bh)) if f > bf || (f == bf && h >= bh) => {}
                _ => best = Some((pos, f, h)),
            }
        }
        best.map(|(pos, _, _)| pos)
    }

    fn finish(&mut self, result: PathResult) -> Step {
        self.finished = Some(result.clone());
        Step::Finished(result)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// The grid being searched, with its current costs and parent links.
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Coordinates currently on the open list, in discovery order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.finder.open.iter().map(|&i| self.grid.coord_of(i))
    }

    pub fn stats(&self) -> SearchStats {
        self.finder.stats
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use pathfinder_grid::Bounds;
    use proptest::prelude::*;

    /// Lowest route cost by exhaustive Dijkstra, or `None` if unreachable.
    fn dijkstra_cost(grid: &Grid) -> Option<i32> {
        let mut dist: Vec<Option<i32>> = vec![None; grid.len()];
        let mut done = vec![false; grid.len()];
        dist[grid.start_index()] = Some(0);
        let mut buf = Vec::new();
        loop {
            let next = (0..grid.len())
                .filter(|&i| !done[i])
                .filter_map(|i| dist[i].map(|d| (d, i)))
                .min();
            let Some((d, i)) = next else {
                break;
            };
            done[i] = true;
            buf.clear();
            grid.neighbors_of(grid.coord_of(i), &mut buf);
            for &np in &buf {
                let ni = grid.index_of(np).unwrap();
                if !grid.cells()[ni].is_walkable() {
                    continue;
                }
                let nd = d + octile(grid.coord_of(i), np);
                if dist[ni].is_none_or(|old| nd < old) {
                    dist[ni] = Some(nd);
                }
            }
        }
        dist[grid.end_index()]
    }

    fn arb_endpoints() -> impl Strategy<Value = (i32, i32, usize, usize)> {
        (1i32..9, 1i32..9)
            .prop_filter("need two cells", |(r, c)| r * c >= 2)
            .prop_flat_map(|(rows, cols)| {
                let n = (rows * cols) as usize;
                (Just(rows), Just(cols), 0..n, 0..n)
            })
            .prop_filter("start == end", |(_, _, s, e)| s != e)
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        arb_endpoints()
            .prop_flat_map(|(rows, cols, s, e)| {
                let n = (rows * cols) as usize;
                (
                    Just((rows, cols, s, e)),
                    proptest::collection::vec(proptest::bool::weighted(0.35), n),
                )
            })
            .prop_map(|((rows, cols, s, e), mask)| {
                let b = Bounds::new(rows, cols);
                let mut g = Grid::new(rows, cols, b.coord(s), b.coord(e)).unwrap();
                for (i, blocked) in mask.into_iter().enumerate() {
                    if blocked && i != s && i != e {
                        g.set_obstacle(b.coord(i), true).unwrap();
                    }
                }
                g
            })
    }

    proptest! {
        #[test]
        fn open_grid_cost_is_octile_distance((rows, cols, s, e) in arb_endpoints()) {
            let b = Bounds::new(rows, cols);
            let mut g = Grid::new(rows, cols, b.coord(s), b.coord(e)).unwrap();
            let path = PathFinder::new().find_path(&mut g).unwrap().into_path().unwrap();
            prop_assert_eq!(path.cost(), octile(b.coord(s), b.coord(e)));
        }

        #[test]
        fn found_paths_are_valid_and_optimal(mut g in arb_grid()) {
            let expected = dijkstra_cost(&g);
            let result = PathFinder::new().find_path(&mut g).unwrap();
            match (result, expected) {
                (PathResult::Found(path), Some(cost)) => {
                    prop_assert_eq!(path.cost(), cost);
                    prop_assert_eq!(path.start(), g.start());
                    prop_assert_eq!(path.goal(), g.end());
                    prop_assert!(path.is_contiguous());
                    let walked: i32 = path.coords().windows(2).map(|w| octile(w[0], w[1])).sum();
                    prop_assert_eq!(walked, path.cost());
                    for p in path.coords() {
                        prop_assert!(g.contains(*p));
                        prop_assert!(g.cell(*p).unwrap().is_walkable());
                    }
                }
                (PathResult::NotFound, None) => {}
                (result, expected) => {
                    prop_assert!(false, "got {:?}, dijkstra cost {:?}", result, expected);
                }
            }
        }

        #[test]
        fn reset_restores_open_grid_result(mut g in arb_grid()) {
            let mut clean = Grid::new(g.rows(), g.cols(), g.start(), g.end()).unwrap();
            let mut finder = PathFinder::new();
            let expected = finder.find_path(&mut clean).unwrap();
            finder.find_path(&mut g).unwrap();
            g.reset();
            prop_assert_eq!(finder.find_path(&mut g).unwrap(), expected);
        }
    }
}
