//! Solver configuration.

use catmouse_core::CellKind;
use catmouse_paths::TieRule;

/// Which question the solver answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Look for a route the cat can never cut off; if there is none, report
    /// the route the mouse would take ignoring the cat.
    #[default]
    Pursuit,
    /// Ignore the cat's timing and find the shortest route around static
    /// obstacles only.
    StaticObstacles,
}

/// Which cell kinds an agent cannot enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Terrain {
    /// Only walls block.
    WallsOnly,
    /// Walls and traps block.
    WallsAndTraps,
}

impl Terrain {
    /// Whether a cell of `kind` is impassable under this rule.
    pub const fn blocks(self, kind: CellKind) -> bool {
        match kind {
            CellKind::Wall => true,
            CellKind::Trap => matches!(self, Self::WallsAndTraps),
            _ => false,
        }
    }
}

/// Configuration for a [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    pub mode: Mode,
    /// Blocking rule for the cat's distance field.
    pub cat_terrain: Terrain,
    /// Blocking rule for every mouse search.
    pub mouse_terrain: Terrain,
    /// Treat the cat's starting cell as impassable for the mouse.
    pub cat_blocks_mouse: bool,
    /// Who wins when both agents reach an exit on the same step.
    pub ties: TieRule,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Pursuit,
            cat_terrain: Terrain::WallsOnly,
            mouse_terrain: Terrain::WallsAndTraps,
            cat_blocks_mouse: false,
            ties: TieRule::GoalWins,
        }
    }
}

impl SolverConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_cat_terrain(mut self, terrain: Terrain) -> Self {
        self.cat_terrain = terrain;
        self
    }

    pub fn with_mouse_terrain(mut self, terrain: Terrain) -> Self {
        self.mouse_terrain = terrain;
        self
    }

    pub fn with_cat_blocks_mouse(mut self, blocks: bool) -> Self {
        self.cat_blocks_mouse = blocks;
        self
    }

    pub fn with_ties(mut self, ties: TieRule) -> Self {
        self.ties = ties;
        self
    }
}
