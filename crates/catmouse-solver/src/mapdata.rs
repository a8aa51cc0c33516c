//! Map documents as exchanged with front-ends.
//!
//! Two shapes are accepted:
//!
//! ```json
//! {"grid_size": {"N": 3, "M": 3}, "map": [["M", ".", "D"], ...]}
//! {"width": 3, "height": 3, "grid": ["M.D", ...]}
//! ```
//!
//! Rows may be arrays of one-character strings or plain strings, and an
//! optional `"blocked"` mask of booleans walls off open cells.

use serde::{Deserialize, Serialize};

use catmouse_core::{Maze, MazeError, Point};

/// Grid dimensions in the `{"N": rows, "M": cols}` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    #[serde(rename = "N")]
    pub rows: usize,
    #[serde(rename = "M")]
    pub cols: usize,
}

/// One row of cell codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Row {
    Text(String),
    Cells(Vec<char>),
}

impl Row {
    fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Cells(cells) => cells.iter().collect(),
        }
    }
}

/// A map document, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<GridSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(alias = "grid")]
    pub map: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<Vec<Vec<bool>>>,
}

impl MapData {
    /// Document for an already built maze, in the `grid_size` form.
    pub fn from_maze(maze: &Maze) -> Self {
        let map = maze
            .to_string()
            .lines()
            .map(|line| Row::Text(line.to_string()))
            .collect();
        Self {
            grid_size: Some(GridSize {
                rows: maze.height() as usize,
                cols: maze.width() as usize,
            }),
            map,
            ..Self::default()
        }
    }

    /// The declared (width, height), if the document states one.
    pub fn declared_size(&self) -> Option<(usize, usize)> {
        self.grid_size
            .map(|g| (g.cols, g.rows))
            .or(self.width.zip(self.height))
    }

    /// Validate the document and build its maze.
    pub fn to_maze(&self) -> Result<Maze, MazeError> {
        let rows: Vec<String> = self.map.iter().map(Row::to_text).collect();
        let maze = Maze::from_rows(&rows)?;
        if let Some((w, h)) = self.declared_size() {
            if (w, h) != (maze.width() as usize, maze.height() as usize) {
                return Err(MazeError::SizeMismatch {
                    declared: Point::new(
                        i32::try_from(w).unwrap_or(i32::MAX),
                        i32::try_from(h).unwrap_or(i32::MAX),
                    ),
                    found: Point::new(maze.width(), maze.height()),
                });
            }
        }
        match &self.blocked {
            Some(mask) => maze.with_blocked(mask),
            None => Ok(maze),
        }
    }
}
