//! The unified solver: one breadth-first core, two modes.

use catmouse_core::{Maze, Point};
use catmouse_paths::{
    MazePather, Pather, distance_field, exhaustive_search, reconstruct, safe_search,
};

use crate::config::{Mode, SolverConfig, Terrain};
use crate::error::SolveError;
use crate::goals::GoalSet;
use crate::solution::{Outcome, Solution, Strategy};

/// Solves mazes according to a [`SolverConfig`].
///
/// A solver holds no search state; every call to [`solve`](Self::solve)
/// allocates its own fields, so one solver can serve any number of mazes,
/// from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Parse `text` as rows of cell codes and solve it.
    pub fn solve_text(&self, text: &str) -> Result<Solution, SolveError> {
        let maze = Maze::parse(text)?;
        self.solve(&maze)
    }

    /// Find the mouse's escape route.
    ///
    /// Not finding a route is reported through [`Solution::outcome`]; an
    /// `Err` means the searches contradicted themselves.
    pub fn solve(&self, maze: &Maze) -> Result<Solution, SolveError> {
        let goals = GoalSet::select(maze);
        log::debug!(
            "solving {}x{} maze, mode {:?}, {} {}",
            maze.width(),
            maze.height(),
            self.config.mode,
            goals.len(),
            if goals.is_door_exit() { "door(s)" } else { "border exits" },
        );
        if goals.is_empty() {
            return Ok(Solution::unrouted(maze, Outcome::NoExit));
        }

        let cat = maze.cat();
        let mouse = MazePather::new(
            maze,
            blocker(
                maze,
                self.config.mouse_terrain,
                self.config.cat_blocks_mouse.then_some(cat),
            ),
        );

        match self.config.mode {
            Mode::Pursuit => self.pursue(maze, &goals, &mouse),
            Mode::StaticObstacles => {
                nearest(maze, &goals, &mouse, Outcome::Escaped, Strategy::Direct)
            }
        }
    }

    fn pursue<P: Pather>(
        &self,
        maze: &Maze,
        goals: &GoalSet,
        mouse: &P,
    ) -> Result<Solution, SolveError> {
        let cat = MazePather::new(maze, blocker(maze, self.config.cat_terrain, None));
        let cat_field = distance_field(&cat, maze.bounds(), maze.cat());
        log::debug!("cat reaches {} cells", cat_field.len());

        let safe = safe_search(
            mouse,
            maze.bounds(),
            maze.mouse(),
            &cat_field,
            self.config.ties,
            |p| goals.contains(p),
        );
        if let Some(goal) = safe.goal {
            let path = reconstruct(&safe.predecessors, maze.mouse(), goal)?;
            log::debug!("safe route to {goal}, {} moves", path.len() - 1);
            return Ok(Solution::routed(maze, Outcome::Escaped, Strategy::Safe, path));
        }

        log::debug!(
            "no safe route ({} safe cells), falling back to ignoring the cat",
            safe.distances.len()
        );
        nearest(maze, goals, mouse, Outcome::Doomed, Strategy::Fallback)
    }
}

/// Solve `maze` with the default configuration.
pub fn solve(maze: &Maze) -> Result<Solution, SolveError> {
    Solver::default().solve(maze)
}

/// Route the mouse to the closest goal ignoring the cat.
fn nearest<P: Pather>(
    maze: &Maze,
    goals: &GoalSet,
    mouse: &P,
    outcome: Outcome,
    strategy: Strategy,
) -> Result<Solution, SolveError> {
    let search = exhaustive_search(mouse, maze.bounds(), maze.mouse());
    let Some((goal, dist)) = goals.nearest(&search.distances) else {
        log::debug!("no goal among {} reachable cells", search.distances.len());
        return Ok(Solution::unrouted(maze, Outcome::NoPath));
    };
    log::debug!("{strategy:?} route to {goal}, {dist} moves");
    let path = reconstruct(&search.predecessors, maze.mouse(), goal)?;
    Ok(Solution::routed(maze, outcome, strategy, path))
}

fn blocker(maze: &Maze, terrain: Terrain, extra: Option<Point>) -> impl Fn(Point) -> bool + '_ {
    move |p| Some(p) == extra || maze.at(p).is_some_and(|k| terrain.blocks(k))
}
