//! [`Board`]: the state behind an interactive pathfinding front-end.
//!
//! A front-end forwards obstacle toggles and "find path" / "reset" requests
//! here and paints whatever [`Board::render`] (or the last result) says.
//! Toggles and searches are serialised by `&mut self`.

use pathfinder_grid::{CellType, Coord, Grid, GridConfig, GridError};

use crate::error::SearchError;
use crate::finder::PathFinder;
use crate::path::PathResult;

/// Glyph used for trail cells in [`Board::render`].
pub const TRAIL_GLYPH: char = '*';

#[derive(Debug)]
pub struct Board {
    grid: Grid,
    finder: PathFinder,
    attempts: u32,
    last: Option<PathResult>,
}

impl Board {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            finder: PathFinder::new(),
            attempts: 0,
            last: None,
        }
    }

    /// Build a board with an empty grid described by `config`.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Ok(Self::new(config.build()?))
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of searches since creation or the last reset.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Result of the last search, unless the grid changed since.
    #[inline]
    pub fn last_result(&self) -> Option<&PathResult> {
        self.last.as_ref()
    }

    /// Flip a cell between walkable and obstacle.
    ///
    /// The start and end cells are rejected with [`GridError::Reserved`].
    pub fn toggle_obstacle(&mut self, p: Coord) -> Result<CellType, GridError> {
        let kind = self.grid.toggle_obstacle(p)?;
        self.last = None;
        Ok(kind)
    }

    /// Search from start to end and remember the result.
    pub fn find_path(&mut self) -> Result<PathResult, SearchError> {
        self.attempts += 1;
        let result = self.finder.find_path(&mut self.grid)?;
        match result.path() {
            Some(path) => log::info!(
                "attempt {}: path through {} cells, cost {}",
                self.attempts,
                path.len(),
                path.cost()
            ),
            None => log::info!("attempt {}: no path found", self.attempts),
        }
        self.last = Some(result.clone());
        Ok(result)
    }

    /// Clear every obstacle, the attempt counter and the remembered result.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.attempts = 0;
        self.last = None;
    }

    /// The grid layout with the last trail drawn over walkable cells.
    pub fn render(&self) -> String {
        let trail = self
            .last
            .as_ref()
            .and_then(PathResult::path)
            .map(|p| p.trail())
            .unwrap_or_default();
        self.grid.render_with(|p| {
            (trail.contains(&p) && !self.grid.is_reserved(p)).then_some(TRAIL_GLYPH)
        })
    }
}
