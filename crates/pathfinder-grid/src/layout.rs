//! Textual grid layouts.
//!
//! A layout is one line per row, one glyph per cell: `.` walkable,
//! `#` obstacle, `S` start, `E` end.
//!
//! ```text
//! S..#
//! .#.#
//! ...E
//! ```

use std::fmt;
use std::str::FromStr;

use crate::cell::CellType;
use crate::error::{Endpoint, LayoutError};
use crate::geom::Coord;
use crate::grid::Grid;

impl FromStr for Grid {
    type Err = LayoutError;

    /// Parse a layout. Surrounding whitespace on each line and blank lines
    /// before or after the block are ignored.
    fn from_str(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.lines().map(str::trim).collect();
        let first = lines
            .iter()
            .position(|l| !l.is_empty())
            .ok_or(LayoutError::Empty)?;
        let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);
        let lines = &lines[first..=last];
        let width = lines[0].chars().count();

        let mut start = None;
        let mut end = None;
        let mut obstacles = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Coord::new(row as i32, col as i32);
                match CellType::from_glyph(ch) {
                    Some(CellType::Walkable) => {}
                    Some(CellType::Obstacle) => obstacles.push(pos),
                    Some(CellType::Start) => claim(&mut start, Endpoint::Start, pos)?,
                    Some(CellType::End) => claim(&mut end, Endpoint::End, pos)?,
                    None => return Err(LayoutError::InvalidGlyph { ch, pos }),
                }
            }
        }

        let start = start.ok_or(LayoutError::Missing(Endpoint::Start))?;
        let end = end.ok_or(LayoutError::Missing(Endpoint::End))?;
        let mut grid = Grid::new(lines.len() as i32, width as i32, start, end)?;
        for p in obstacles {
            grid.set_obstacle(p, true)?;
        }
        Ok(grid)
    }
}

fn claim(slot: &mut Option<Coord>, which: Endpoint, pos: Coord) -> Result<(), LayoutError> {
    if slot.is_some() {
        return Err(LayoutError::Duplicate { which, pos });
    }
    *slot = Some(pos);
    Ok(())
}

impl Grid {
    /// Render the layout, letting `overlay` replace the glyph of any cell.
    pub fn render_with(&self, overlay: impl Fn(Coord) -> Option<char>) -> String {
        let cols = self.cols() as usize;
        let mut out = String::with_capacity(self.len() + self.rows() as usize);
        for (i, c) in self.cells().iter().enumerate() {
            if i > 0 && i % cols == 0 {
                out.push('\n');
            }
            out.push(overlay(c.pos()).unwrap_or(c.kind().glyph()));
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: Grid = "S.#\n#.E".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"S.#\\n#.E\"");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_rejects_bad_layout() {
        let res: Result<Grid, _> = serde_json::from_str("\"S..\"");
        assert!(res.is_err());
    }
}
