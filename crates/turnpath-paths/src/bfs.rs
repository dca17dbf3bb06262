use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use turnpath_core::{Direction, Graph, NodeId};

use crate::path::Path;
use crate::state::SearchState;
use crate::traits::{Origin, PathError, PathFindingStrategy, origin};

/// Breadth-first search that tracks direction changes.
///
/// States are expanded in FIFO order of discovery. For every
/// (node, arrival direction) pair the fewest turns seen so far is recorded,
/// and a state is only re-expanded when it is reached with strictly fewer
/// turns. The search stops at the first goal it *discovers*, so the result
/// has the fewest hops among discovered routes but not necessarily the
/// fewest turns overall; use [`LeastTurnsPathFinder`](crate::LeastTurnsPathFinder)
/// for that.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPathFinder;

impl BfsPathFinder {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Eq + Hash + Clone> PathFindingStrategy<T> for BfsPathFinder {
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
        let mut queue: VecDeque<SearchState> = VecDeque::new();
        queue.push_back(SearchState::start(start_id));
        let mut expanded = 0usize;

        while let Some(state) = queue.pop_front() {
            let Some(node) = graph.node(state.node()) else {
                continue;
            };
            expanded += 1;
            log::trace!(
                "bfs: expanding {} (arrived {:?}, {} turns)",
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
                    Entry::Occupied(mut e) => {
                        if turns >= *e.get() {
                            continue;
                        }
                        e.insert(turns);
                    }
                    Entry::Vacant(e) => {
                        e.insert(turns);
                    }
                }

                let succ = state.advance(next, dir, turns);
                if is_goal(value, goal) {
                    log::debug!(
                        "bfs: goal reached after {expanded} expansions ({} hops, {turns} turns)",
                        succ.path().len() - 1
                    );
                    return Ok(Some(succ.into_path(graph)));
                }
                queue.push_back(succ);
            }
        }

        log::debug!("bfs: no path after {expanded} expansions");
        Ok(None)
    }
}
