//! The [`Maze`] type: an immutable grid of [`CellKind`]s with the two agents
//! located.
//!
//! A maze is built once from its character codes and never mutated. Building
//! it is where the "exactly one mouse, exactly one cat" contract is enforced.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::{Point, Range};

/// An immutable maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<CellKind>,
    bounds: Range,
    mouse: Point,
    cat: Point,
    doors: Vec<Point>,
}

impl Maze {
    /// Parse newline-separated rows of cell codes.
    ///
    /// Trailing blank lines are ignored and `\r\n` line endings are accepted.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let mut rows: Vec<&str> = s.lines().collect();
        while rows.last().is_some_and(|l| l.trim().is_empty()) {
            rows.pop();
        }
        Self::from_rows(&rows)
    }

    /// Build a maze from rows of cell codes, one string per row.
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::InconsistentSize {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let kind = CellKind::from_code(ch).ok_or(MazeError::InvalidCode {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(kind);
            }
        }

        Self::from_cells(width as i32, height as i32, cells)
    }

    /// Build a maze from a row-major vector of cells.
    pub fn from_cells(width: i32, height: i32, cells: Vec<CellKind>) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::Empty);
        }
        let bounds = Range::new(0, 0, width, height);
        if cells.len() != bounds.len() {
            return Err(MazeError::CellCount {
                expected: bounds.len(),
                found: cells.len(),
            });
        }

        let mut mouse = None;
        let mut cat = None;
        let mut doors = Vec::new();
        for (p, &kind) in bounds.iter().zip(cells.iter()) {
            match kind {
                CellKind::MouseStart => {
                    if let Some(first) = mouse {
                        return Err(MazeError::DuplicateMouse { first, second: p });
                    }
                    mouse = Some(p);
                }
                CellKind::CatStart => {
                    if let Some(first) = cat {
                        return Err(MazeError::DuplicateCat { first, second: p });
                    }
                    cat = Some(p);
                }
                CellKind::Door => doors.push(p),
                _ => {}
            }
        }

        Ok(Self {
            cells,
            bounds,
            mouse: mouse.ok_or(MazeError::MissingMouse)?,
            cat: cat.ok_or(MazeError::MissingCat)?,
            doors,
        })
    }

    /// Overlay a per-cell open/blocked mask. Blocked open cells become walls;
    /// walls and traps stay as they are.
    ///
    /// The mask must have the maze's dimensions, and neither agent nor a door
    /// may sit on a blocked cell.
    pub fn with_blocked<R: AsRef<[bool]>>(mut self, mask: &[R]) -> Result<Self, MazeError> {
        let (width, height) = (self.width() as usize, self.height() as usize);
        if mask.len() != height {
            return Err(MazeError::CellCount {
                expected: height,
                found: mask.len(),
            });
        }
        for (y, row) in mask.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MazeError::InconsistentSize {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &blocked) in row.iter().enumerate() {
                if !blocked {
                    continue;
                }
                let i = y * width + x;
                match self.cells[i] {
                    CellKind::Open => self.cells[i] = CellKind::Wall,
                    CellKind::Wall | CellKind::Trap => {}
                    kind => {
                        return Err(MazeError::BlockedMarker {
                            kind,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                }
            }
        }
        Ok(self)
    }

    /// The bounding range of the maze, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Cell kind at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<CellKind> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width() + p.x) as usize])
    }

    /// Mouse start position.
    #[inline]
    pub fn mouse(&self) -> Point {
        self.mouse
    }

    /// Cat start position.
    #[inline]
    pub fn cat(&self) -> Point {
        self.cat
    }

    /// Door positions in row-major order.
    #[inline]
    pub fn doors(&self) -> &[Point] {
        &self.doors
    }

    /// How many cells have the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Whether `p` is on the outer ring of the maze.
    #[inline]
    pub fn is_border(&self, p: Point) -> bool {
        self.bounds.on_edge(p)
    }

    /// Border cells in row-major order, each exactly once.
    pub fn border(&self) -> impl Iterator<Item = Point> + use<> {
        let bounds = self.bounds;
        bounds.iter().filter(move |&p| bounds.on_edge(p))
    }

    /// The in-bounds orthogonal neighbours of `p`. Diagonals are never
    /// neighbours.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + use<> {
        let bounds = self.bounds;
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| bounds.contains(n))
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width() as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for kind in row {
                write!(f, "{kind}")?;
            }
        }
        Ok(())
    }
}

/// Errors raised while building a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The number of cells (or mask rows) does not match the dimensions.
    CellCount { expected: usize, found: usize },
    /// The size announced alongside the grid (width, height) differs from
    /// the grid itself.
    SizeMismatch { declared: Point, found: Point },
    /// A character outside the map alphabet.
    InvalidCode { ch: char, pos: Point },
    /// No `M` cell.
    MissingMouse,
    /// No `C` cell.
    MissingCat,
    /// More than one `M` cell.
    DuplicateMouse { first: Point, second: Point },
    /// More than one `C` cell.
    DuplicateCat { first: Point, second: Point },
    /// A blocked-mask entry covers an agent or a door.
    BlockedMarker { kind: CellKind, pos: Point },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty grid"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::CellCount { expected, found } => {
                write!(f, "maze: expected {expected} cells, found {found}")
            }
            Self::SizeMismatch { declared, found } => write!(
                f,
                "maze: declared {}x{} but grid is {}x{}",
                declared.x, declared.y, found.x, found.y
            ),
            Self::InvalidCode { ch, pos } => {
                write!(f, "maze contains invalid code \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMouse => write!(f, "maze: no mouse found"),
            Self::MissingCat => write!(f, "maze: no cat found"),
            Self::DuplicateMouse { first, second } => {
                write!(f, "maze: two mice, at {first} and {second}")
            }
            Self::DuplicateCat { first, second } => {
                write!(f, "maze: two cats, at {first} and {second}")
            }
            Self::BlockedMarker { kind, pos } => {
                write!(f, "maze: blocked flag set on \u{201c}{kind}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
