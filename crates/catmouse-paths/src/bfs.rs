//! Breadth-first searches: plain distance fields, the threat-constrained
//! search and the unconstrained fallback.
//!
//! All of them share one expansion loop. Each call allocates its own
//! [`DistanceField`] and [`PredecessorMap`], so nothing leaks between calls.

use std::collections::VecDeque;

use catmouse_core::{Point, Range};

use crate::field::{DistanceField, PredecessorMap};
use crate::traits::Pather;

/// Result of a single-source search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    /// The first dequeued point satisfying the goal predicate, if any.
    pub goal: Option<Point>,
    /// Hop counts of every admitted point.
    pub distances: DistanceField,
    /// Back-pointers of every admitted point except the source.
    pub predecessors: PredecessorMap,
}

impl Search {
    /// Whether the search stopped on a goal.
    #[inline]
    pub fn reached(&self) -> bool {
        self.goal.is_some()
    }
}

/// Compute the hop-count field from `source` to everything reachable.
///
/// A `source` outside `range` yields an empty field.
pub fn distance_field<P: Pather>(pather: &P, range: Range, source: Point) -> DistanceField {
    expand(pather, range, source, |_, _| true, |_| false).distances
}

/// How [`safe_search`] treats a cell the opponent reaches on the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TieRule {
    /// A tie at a goal is won by the searcher, who leaves through the goal on
    /// arrival. Ties anywhere else are unsafe.
    #[default]
    GoalWins,
    /// A tie is unsafe everywhere, goals included.
    Unsafe,
}

/// Search from `source`, admitting a cell only if it is reached strictly
/// before the `threat` field says the opponent gets there, or the opponent
/// never gets there at all.
///
/// Equal arrival times are unsafe, except on a goal under
/// [`TieRule::GoalWins`]. Stops as soon as a dequeued cell satisfies
/// `is_goal`.
pub fn safe_search<P, G>(
    pather: &P,
    range: Range,
    source: Point,
    threat: &DistanceField,
    ties: TieRule,
    is_goal: G,
) -> Search
where
    P: Pather,
    G: Fn(Point) -> bool,
{
    let admit = |p: Point, arrival: i32| match threat.get(p) {
        Some(t) if arrival < t => true,
        Some(t) if arrival == t => ties == TieRule::GoalWins && is_goal(p),
        Some(_) => false,
        None => true,
    };
    expand(pather, range, source, admit, &is_goal)
}

/// Plain search from `source` ignoring any opponent. Stops as soon as a
/// dequeued cell satisfies `is_goal`.
pub fn unconstrained_search<P, G>(pather: &P, range: Range, source: Point, is_goal: G) -> Search
where
    P: Pather,
    G: Fn(Point) -> bool,
{
    expand(pather, range, source, |_, _| true, is_goal)
}

/// Plain search from `source` that never stops early, so that every
/// reachable cell gets a distance and a predecessor.
pub fn exhaustive_search<P: Pather>(pather: &P, range: Range, source: Point) -> Search {
    expand(pather, range, source, |_, _| true, |_| false)
}

fn expand<P, A, G>(pather: &P, range: Range, source: Point, admit: A, is_goal: G) -> Search
where
    P: Pather,
    A: Fn(Point, i32) -> bool,
    G: Fn(Point) -> bool,
{
    let mut distances = DistanceField::new(range);
    let mut predecessors = PredecessorMap::new(range);
    let mut goal = None;

    let mut queue: VecDeque<Point> = VecDeque::new();
    if distances.set(source, 0) {
        queue.push_back(source);
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(cp) = queue.pop_front() {
        if is_goal(cp) {
            goal = Some(cp);
            break;
        }
        let current_dist = distances.at(cp);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if !range.contains(np) || distances.contains(np) {
                continue;
            }
            let nd = current_dist + 1;
            if !admit(np, nd) {
                continue;
            }
            distances.set(np, nd);
            predecessors.set(np, cp);
            queue.push_back(np);
        }
    }

    Search {
        goal,
        distances,
        predecessors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pather::MazePather;
    use catmouse_core::{CellKind, Maze};

    fn walls(maze: &Maze) -> impl Fn(Point) -> bool + '_ {
        move |p| maze.at(p) == Some(CellKind::Wall)
    }

    fn safe_from_mouse<P: Pather>(
        pather: &P,
        maze: &Maze,
        threat: &DistanceField,
        ties: TieRule,
        is_goal: impl Fn(Point) -> bool,
    ) -> Search {
        safe_search(pather, maze.bounds(), maze.mouse(), threat, ties, is_goal)
    }

    /// Shortest distances by repeated relaxation, independent of queue order.
    fn brute_force(open: &[bool], w: i32, h: i32, src: Point) -> Vec<Option<i32>> {
        let idx = |p: Point| (p.y * w + p.x) as usize;
        let mut d = vec![None; (w * h) as usize];
        d[idx(src)] = Some(0);
        loop {
            let mut changed = false;
            for y in 0..h {
                for x in 0..w {
                    let p = Point::new(x, y);
                    if !open[idx(p)] {
                        continue;
                    }
                    for n in p.neighbors_4() {
                        if n.x < 0 || n.y < 0 || n.x >= w || n.y >= h {
                            continue;
                        }
                        if let Some(nd) = d[idx(n)] {
                            if d[idx(p)].is_none_or(|cur| nd + 1 < cur) {
                                d[idx(p)] = Some(nd + 1);
                                changed = true;
                            }
                        }
                    }
                }
            }
            if !changed {
                return d;
            }
        }
    }

    #[test]
    fn distances_match_brute_force_on_every_3x3_layout() {
        let src = Point::new(0, 0);
        for mask in 0u32..(1 << 8) {
            // Bit i walls off cell i + 1; the source cell stays open.
            let mut open = vec![true; 9];
            for i in 0..8 {
                open[i + 1] = mask & (1 << i) == 0;
            }
            let rows: Vec<String> = (0..3)
                .map(|y| {
                    (0..3)
                        .map(|x| {
                            let i = y * 3 + x;
                            match (i, open[i]) {
                                (0, _) => 'M',
                                (_, true) => '.',
                                (_, false) => '#',
                            }
                        })
                        .collect()
                })
                .collect();
            // The cat is parked outside the field under test.
            let mut rows = rows;
            rows.iter_mut().for_each(|r| r.push('#'));
            rows[0].pop();
            rows[0].push('C');

            let maze = Maze::from_rows(&rows).unwrap();
            let pather = MazePather::new(&maze, walls(&maze));
            let field = distance_field(&pather, maze.bounds(), src);
            let expected = brute_force(&open, 3, 3, src);
            for y in 0..3 {
                for x in 0..3 {
                    let p = Point::new(x, y);
                    assert_eq!(
                        field.get(p),
                        expected[(y * 3 + x) as usize],
                        "mask {mask:#b} at {p}"
                    );
                }
            }
        }
    }

    #[test]
    fn distance_field_basic() {
        let maze = Maze::parse("M.#.\n..#C\n....").unwrap();
        let pather = MazePather::new(&maze, walls(&maze));
        let field = distance_field(&pather, maze.bounds(), maze.cat());
        assert_eq!(field.get(Point::new(3, 1)), Some(0));
        assert_eq!(field.get(Point::new(3, 0)), Some(1));
        assert_eq!(field.get(Point::new(0, 0)), Some(6));
        assert_eq!(field.get(Point::new(2, 0)), None);
        assert_eq!(field.len(), 10);
        // Discovery order is non-decreasing in cost.
        assert!(field.nodes().windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn source_outside_range_is_empty() {
        let maze = Maze::parse("MC").unwrap();
        let pather = MazePather::new(&maze, |_| false);
        let field = distance_field(&pather, maze.bounds(), Point::new(9, 9));
        assert!(field.is_empty());
        let search = exhaustive_search(&pather, maze.bounds(), Point::new(-1, 0));
        assert!(!search.reached());
        assert!(search.predecessors.is_empty());
    }

    #[test]
    fn safe_search_rejects_ties() {
        // Mouse and cat are both two steps from the middle cell of the
        // bottom row.
        let maze = Maze::parse("M.C\n...").unwrap();
        let pather = MazePather::new(&maze, |_| false);
        let threat = distance_field(&pather, maze.bounds(), maze.cat());
        let search = safe_from_mouse(&pather, &maze, &threat, TieRule::Unsafe, |_| false);
        // (1, 0): mouse 1, cat 1 -> unsafe.
        assert!(!search.distances.contains(Point::new(1, 0)));
        // (0, 1): mouse 1, cat 3 -> safe.
        assert_eq!(search.distances.get(Point::new(0, 1)), Some(1));
        // (1, 1): mouse 2, cat 2 -> unsafe.
        assert!(!search.distances.contains(Point::new(1, 1)));
    }

    #[test]
    fn safe_search_admits_only_strictly_earlier_cells() {
        let maze = Maze::parse("M....\n.#.#.\n.....\n..C..").unwrap();
        let pather = MazePather::new(&maze, walls(&maze));
        let threat = distance_field(&pather, maze.bounds(), maze.cat());
        let search = safe_from_mouse(&pather, &maze, &threat, TieRule::Unsafe, |_| false);
        for node in search.distances.nodes().iter().skip(1) {
            if let Some(t) = threat.get(node.pos) {
                assert!(node.cost < t, "{} reached at {} vs {t}", node.pos, node.cost);
            }
        }
        assert!(!search.distances.contains(maze.cat()));
    }

    #[test]
    fn cells_the_threat_never_reaches_are_safe() {
        // The cat is walled into its own corner.
        let maze = Maze::parse("M..#.\n...#C").unwrap();
        let pather = MazePather::new(&maze, walls(&maze));
        let threat = distance_field(&pather, maze.bounds(), maze.cat());
        assert_eq!(threat.len(), 2);
        let search = exhaustive_search(&pather, maze.bounds(), maze.mouse());
        let safe = safe_from_mouse(&pather, &maze, &threat, TieRule::Unsafe, |_| false);
        assert_eq!(safe.distances.len(), search.distances.len());
    }

    #[test]
    fn goal_ties_follow_the_rule() {
        // Both agents are two steps from the door, on separate sides.
        let maze = Maze::parse("M.D.C").unwrap();
        let pather = MazePather::new(&maze, walls(&maze));
        let threat = distance_field(&pather, maze.bounds(), maze.cat());
        let door = Point::new(2, 0);
        let is_door = |p: Point| p == door;

        let won = safe_from_mouse(&pather, &maze, &threat, TieRule::GoalWins, is_door);
        assert_eq!(won.goal, Some(door));
        assert_eq!(won.distances.get(door), threat.get(door));

        let lost = safe_from_mouse(&pather, &maze, &threat, TieRule::Unsafe, is_door);
        assert_eq!(lost.goal, None);
        assert!(!lost.distances.contains(door));
    }

    #[test]
    fn ties_off_the_goal_stay_unsafe() {
        let maze = Maze::parse("M.C\n...").unwrap();
        let pather = MazePather::new(&maze, |_| false);
        let threat = distance_field(&pather, maze.bounds(), maze.cat());
        let search = safe_search(
            &pather,
            maze.bounds(),
            maze.mouse(),
            &threat,
            TieRule::GoalWins,
            |p| p == Point::new(2, 1),
        );
        // The goal is never reached because (1, 1) ties and is not a goal.
        assert!(!search.distances.contains(Point::new(1, 1)));
        assert!(!search.reached());
    }

    #[test]
    fn stops_on_first_goal() {
        let maze = Maze::parse("M...D\n....C").unwrap();
        let pather = MazePather::new(&maze, |_| false);
        let door = Point::new(4, 0);
        let search = unconstrained_search(&pather, maze.bounds(), maze.mouse(), |p| p == door);
        assert_eq!(search.goal, Some(door));
        assert_eq!(search.distances.get(door), Some(4));
        // The door is dequeued before (4, 1) is ever discovered.
        assert!(!search.distances.contains(Point::new(4, 1)));
        let full = exhaustive_search(&pather, maze.bounds(), maze.mouse());
        assert!(full.distances.len() > search.distances.len());
        assert_eq!(full.goal, None);
    }

    #[test]
    fn source_can_be_the_goal() {
        let maze = Maze::parse("M.C").unwrap();
        let pather = MazePather::new(&maze, |_| false);
        let search = unconstrained_search(&pather, maze.bounds(), maze.mouse(), |_| true);
        assert_eq!(search.goal, Some(maze.mouse()));
        assert!(search.predecessors.is_empty());
    }

    #[test]
    fn predecessors_point_one_step_closer() {
        let maze = Maze::parse("M..#\n.#..\n...C").unwrap();
        let pather = MazePather::new(&maze, walls(&maze));
        let search = exhaustive_search(&pather, maze.bounds(), maze.mouse());
        for node in search.distances.nodes().iter().skip(1) {
            let prev = search.predecessors.get(node.pos).unwrap();
            assert!(prev.is_adjacent(node.pos));
            assert_eq!(search.distances.get(prev), Some(node.cost - 1));
        }
        assert_eq!(search.predecessors.len(), search.distances.len() - 1);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let maze = Maze::parse("M...\n.##.\n...C").unwrap();
        let pather = MazePather::new(&maze, walls(&maze));
        let a = exhaustive_search(&pather, maze.bounds(), maze.mouse());
        let b = exhaustive_search(&pather, maze.bounds(), maze.mouse());
        assert_eq!(a, b);
    }
}
