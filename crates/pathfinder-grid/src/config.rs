//! [`GridConfig`]: a serialisable description of a grid to build.

use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

/// Dimensions, endpoints and initial obstacles of a grid.
///
/// The default is the classic 20x20 board with the start at (2, 2), the
/// end at (17, 17) and no obstacles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub columns: i32,
    pub start: Coord,
    pub end: Coord,
    pub obstacles: Vec<Coord>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            start: Coord::new(2, 2),
            end: Coord::new(17, 17),
            obstacles: Vec::new(),
        }
    }
}

impl GridConfig {
    /// Build the described grid.
    ///
    /// Fails like [`Grid::new`], or if an obstacle is out of bounds or on
    /// the start or end cell.
    pub fn build(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.rows, self.columns, self.start, self.end)?;
        for &p in &self.obstacles {
            grid.set_obstacle(p, true)?;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellType;

    #[test]
    fn default_board() {
        let g = GridConfig::default().build().unwrap();
        assert_eq!((g.rows(), g.cols()), (20, 20));
        assert_eq!(g.kind(Coord::new(2, 2)), Some(CellType::Start));
        assert_eq!(g.kind(Coord::new(17, 17)), Some(CellType::End));
    }

    #[test]
    fn invalid_config_fails() {
        let cfg = GridConfig {
            rows: 4,
            columns: 4,
            start: Coord::new(0, 0),
            end: Coord::new(4, 4),
            obstacles: Vec::new(),
        };
        assert!(matches!(
            cfg.build(),
            Err(GridError::EndpointOutOfBounds { .. })
        ));

        let cfg = GridConfig {
            obstacles: vec![Coord::new(1, 1), Coord::new(2, 2)],
            ..GridConfig::default()
        };
        assert_eq!(cfg.build(), Err(GridError::Reserved(Coord::new(2, 2))));
    }

    #[test]
    fn obstacles_applied() {
        let cfg = GridConfig {
            rows: 2,
            columns: 3,
            start: Coord::new(0, 0),
            end: Coord::new(1, 2),
            obstacles: vec![Coord::new(0, 1), Coord::new(1, 1)],
        };
        assert_eq!(cfg.build().unwrap().to_string(), "S#.\n.#E");
    }
}
