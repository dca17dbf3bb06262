//! Minimum-turn search.

use std::cmp::Reverse;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use turnpath_core::{Direction, Graph, NodeId};

use crate::path::Path;
use crate::state::SearchState;
use crate::traits::{Origin, PathError, PathFindingStrategy, origin};

/// A queued state, ordered by `(turns, seq)`.
#[derive(Debug)]
struct Entry {
    turns: usize,
    /// Discovery order; breaks ties between equal turn counts FIFO.
    seq: u64,
    state: SearchState,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.turns == other.turns && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.turns
            .cmp(&other.turns)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Search that returns a route with the fewest possible turns.
///
/// Explores the same (node, arrival direction) state space as
/// [`BfsPathFinder`](crate::BfsPathFinder), but pops states in increasing
/// turn order instead of discovery order and only accepts a goal when it is
/// popped. Among routes with equally few turns, the one discovered first
/// wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastTurnsPathFinder;

impl LeastTurnsPathFinder {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Eq + Hash + Clone> PathFindingStrategy<T> for LeastTurnsPathFinder {
    fn find_path(
        &self,
        graph: &Graph<T>,
        start: &T,
        goal: &T,
        is_goal: &dyn Fn(&T, &T) -> bool,
        is_passable: &dyn Fn(&T) -> bool,
    ) -> Result<Option<Path<T>>, PathError> {
        let start_id = match origin(graph, start, goal, is_goal)? {
            Origin::Settled(result) => return Ok(result),
            Origin::Node(id) => id,
        };

        let mut best: HashMap<(NodeId, Direction), usize> = HashMap::new();
        let mut open: BinaryHeap<Reverse<Entry>> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(Reverse(Entry {
            turns: 0,
            seq,
            state: SearchState::start(start_id),
        }));
        let mut expanded = 0usize;

        while let Some(Reverse(entry)) = open.pop() {
            let state = entry.state;

            if let Some(dir) = state.arrival() {
                // Skip stale entries superseded by a cheaper arrival.
                if best
                    .get(&(state.node(), dir))
                    .is_some_and(|&b| b < state.turns())
                {
                    continue;
                }
                let Some(value) = graph.value(state.node()) else {
                    continue;
                };
                if is_goal(value, goal) {
                    log::debug!(
                        "least-turns: goal reached after {expanded} expansions ({} hops, {} turns)",
                        state.path().len() - 1,
                        state.turns()
                    );
                    return Ok(Some(state.into_path(graph)));
                }
            }

            let Some(node) = graph.node(state.node()) else {
                continue;
            };
            expanded += 1;
            log::trace!(
                "least-turns: expanding {} (arrived {:?}, {} turns)",
                state.node(),
                state.arrival(),
                state.turns()
            );

            for (dir, next) in node.directed_neighbors() {
                let Some(value) = graph.value(next) else {
                    continue;
                };
                if !is_passable(value) {
                    continue;
                }
                let turns = state.turns_towards(dir);
                match best.entry((next, dir)) {
                    MapEntry::Occupied(mut e) => {
                        if turns >= *e.get() {
                            continue;
                        }
                        e.insert(turns);
                    }
                    MapEntry::Vacant(e) => {
                        e.insert(turns);
                    }
                }
                seq += 1;
                open.push(Reverse(Entry {
                    turns,
                    seq,
                    state: state.advance(next, dir, turns),
                }));
            }
        }

        log::debug!("least-turns: no path after {expanded} expansions");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BfsPathFinder;
    use rand::{RngExt, SeedableRng};
    use turnpath_core::{Point, Range};

    fn eq<T: PartialEq>(a: &T, b: &T) -> bool {
        a == b
    }

    fn open<T>(_: &T) -> bool {
        true
    }

    #[test]
    fn prefers_fewer_turns_over_fewer_hops() {
        // s -R-> a -T-> b -R-> g  : 3 hops, 2 turns
        // s -T-> c -R-> d -R-> e -R-> g : 4 hops, 1 turn
        let mut g = Graph::orientational();
        for (from, to, dir) in [
            ("s", "a", Direction::Right),
            ("a", "b", Direction::Top),
            ("b", "g", Direction::Right),
            ("s", "c", Direction::Top),
            ("c", "d", Direction::Right),
            ("d", "e", Direction::Right),
            ("e", "g", Direction::Right),
        ] {
            g.add_directed_edge(from, to, dir, false).unwrap();
        }
        let p = LeastTurnsPathFinder
            .find_path(&g, &"s", &"g", &eq::<&str>, &open::<&str>)
            .unwrap()
            .unwrap();
        assert_eq!(p.nodes(), &["s", "c", "d", "e", "g"]);
        assert_eq!(p.turns(), 1);
    }

    #[test]
    fn straight_and_corner_turn_counts() {
        let mut g = Graph::orientational();
        g.add_directed_edge(0, 1, Direction::Right, true).unwrap();
        g.add_directed_edge(1, 2, Direction::Right, true).unwrap();
        g.add_directed_edge(2, 3, Direction::Top, true).unwrap();
        let straight = LeastTurnsPathFinder
            .find_path(&g, &0, &2, &eq::<i32>, &open::<i32>)
            .unwrap()
            .unwrap();
        assert_eq!(straight.turns(), 0);
        let corner = LeastTurnsPathFinder
            .find_path(&g, &0, &3, &eq::<i32>, &open::<i32>)
            .unwrap()
            .unwrap();
        assert_eq!(corner.nodes(), &[0, 1, 2, 3]);
        assert_eq!(corner.turns(), 1);
    }

    #[test]
    fn open_grid_needs_exactly_one_turn() {
        let g = Graph::grid(Range::new(0, 0, 3, 3), |_| true);
        let p = LeastTurnsPathFinder
            .find_path(&g, &Point::new(0, 0), &Point::new(2, 2), &eq::<Point>, &open::<Point>)
            .unwrap()
            .unwrap();
        assert_eq!(p.len(), 5);
        assert_eq!(p.turns(), 1);
    }

    #[test]
    fn start_goal_and_exhaustion() {
        let g = Graph::grid(Range::new(0, 0, 3, 3), |_| true);
        let here = LeastTurnsPathFinder
            .find_path(&g, &Point::new(2, 0), &Point::new(2, 0), &eq::<Point>, &open::<Point>)
            .unwrap()
            .unwrap();
        assert_eq!(here.nodes(), &[Point::new(2, 0)]);
        let none = LeastTurnsPathFinder
            .find_path(&g, &Point::new(0, 0), &Point::new(2, 2), &eq::<Point>, &|_| false)
            .unwrap();
        assert!(none.is_none());
    }

    fn count_turns(nodes: &[Point]) -> usize {
        let dirs: Vec<Point> = nodes.windows(2).map(|w| w[1] - w[0]).collect();
        dirs.windows(2).filter(|w| w[0] != w[1]).count()
    }

    #[test]
    fn never_worse_than_bfs_on_random_caves() {
        let range = Range::new(0, 0, 12, 9);
        for seed in 0..40u64 {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let walls: Vec<Point> = range
                .iter()
                .filter(|_| rng.random_range(0..100) < 30)
                .collect();
            let g = Graph::grid(range, |p| !walls.contains(&p));
            let from = Point::new(0, 0);
            let to = Point::new(11, 8);
            let passable = |p: &Point| !walls.contains(p);

            let bfs = BfsPathFinder
                .find_path(&g, &from, &to, &eq::<Point>, &passable)
                .unwrap();
            let least = LeastTurnsPathFinder
                .find_path(&g, &from, &to, &eq::<Point>, &passable)
                .unwrap();

            assert_eq!(bfs.is_some(), least.is_some(), "seed {seed}");
            if let (Some(b), Some(l)) = (bfs, least) {
                assert!(l.turns() <= b.turns(), "seed {seed}");
                assert_eq!(count_turns(l.nodes()), l.turns(), "seed {seed}");
                assert_eq!(count_turns(b.nodes()), b.turns(), "seed {seed}");
            }
        }
    }
}
