//! Choosing the cells that count as an escape.

use std::collections::BTreeSet;

use catmouse_core::{CellKind, Maze, Point};
use catmouse_paths::DistanceField;

/// The set of cells the mouse escapes by reaching.
///
/// Iteration is in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalSet {
    goals: BTreeSet<Point>,
    doors: bool,
}

impl GoalSet {
    /// The maze's doors if it has any; otherwise every open border cell,
    /// leaving out walls, traps and the cat's start.
    pub fn select(maze: &Maze) -> Self {
        if !maze.doors().is_empty() {
            return Self {
                goals: maze.doors().iter().copied().collect(),
                doors: true,
            };
        }
        let goals = maze
            .border()
            .filter(|&p| {
                p != maze.cat() && !matches!(maze.at(p), Some(CellKind::Wall | CellKind::Trap))
            })
            .collect();
        Self {
            goals,
            doors: false,
        }
    }

    /// Whether the goals are doors rather than border cells.
    #[inline]
    pub fn is_door_exit(&self) -> bool {
        self.doors
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.goals.contains(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.goals.iter().copied()
    }

    /// The reached goal with the smallest distance in `field`, ties going to
    /// the goal that comes first in row-major order.
    pub fn nearest(&self, field: &DistanceField) -> Option<(Point, i32)> {
        let mut best: Option<(Point, i32)> = None;
        for goal in self.iter() {
            let Some(d) = field.get(goal) else {
                continue;
            };
            log::trace!("goal {goal} reached in {d}");
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((goal, d));
            }
        }
        best
    }
}
