use turnpath_core::{Direction, Graph, NodeId};

use crate::path::Path;

/// One frontier entry of a directional search.
///
/// A state is addressed by its node *and* the direction used to reach it:
/// continuing straight from a node is cheaper than turning, so the same
/// node reached from two sides is two different states. Each state owns its
/// own copy of the route that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    node: NodeId,
    arrival: Option<Direction>,
    turns: usize,
    path: Vec<NodeId>,
}

impl SearchState {
    /// Create a state. `path` is the full route so far, ending at `node`,
    /// and is copied.
    pub fn new(node: NodeId, arrival: Option<Direction>, turns: usize, path: &[NodeId]) -> Self {
        Self {
            node,
            arrival,
            turns,
            path: path.to_vec(),
        }
    }

    /// The initial state of a search: no arrival direction, no turns.
    pub fn start(node: NodeId) -> Self {
        Self::new(node, None, 0, &[node])
    }

    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Direction of the hop that reached this state; `None` at the start.
    #[inline]
    pub fn arrival(&self) -> Option<Direction> {
        self.arrival
    }

    #[inline]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Route from the start to this state's node, both included.
    #[inline]
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Turn count after hopping towards `dir`.
    ///
    /// The first hop out of the start never counts as a turn.
    #[inline]
    pub fn turns_towards(&self, dir: Direction) -> usize {
        match self.arrival {
            Some(a) if a != dir => self.turns + 1,
            _ => self.turns,
        }
    }

    /// The state reached by hopping to `next` towards `dir`.
    pub fn advance(&self, next: NodeId, dir: Direction, turns: usize) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Self {
            node: next,
            arrival: Some(dir),
            turns,
            path,
        }
    }

    /// Convert into a [`Path`] of values from `graph`.
    pub fn into_path<T: Clone>(self, graph: &Graph<T>) -> Path<T> {
        Path::from_ids(graph, &self.path, self.turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (Graph<u8>, NodeId, NodeId, NodeId) {
        let mut g = Graph::orientational();
        let a = g.get_or_create_node(0);
        let b = g.get_or_create_node(1);
        let c = g.get_or_create_node(2);
        (g, a, b, c)
    }

    #[test]
    fn first_hop_is_never_a_turn() {
        let (_, a, _, _) = ids();
        let s = SearchState::start(a);
        for d in Direction::ALL {
            assert_eq!(s.turns_towards(d), 0);
        }
    }

    #[test]
    fn changing_direction_counts_a_turn() {
        let (_, a, b, _) = ids();
        let s = SearchState::start(a).advance(b, Direction::Right, 0);
        assert_eq!(s.turns_towards(Direction::Right), 0);
        assert_eq!(s.turns_towards(Direction::Top), 1);
        assert_eq!(s.turns_towards(Direction::Left), 1);
    }

    #[test]
    fn branches_do_not_share_history() {
        let (_, a, b, c) = ids();
        let root = SearchState::start(a);
        let left = root.advance(b, Direction::Left, 0);
        let right = root.advance(c, Direction::Right, 0);
        assert_eq!(root.path(), &[a]);
        assert_eq!(left.path(), &[a, b]);
        assert_eq!(right.path(), &[a, c]);
    }

    #[test]
    fn new_copies_the_given_route() {
        let (_, a, b, _) = ids();
        let mut route = vec![a, b];
        let s = SearchState::new(b, Some(Direction::Bottom), 0, &route);
        route.push(a);
        assert_eq!(s.path(), &[a, b]);
    }

    #[test]
    fn into_path_resolves_values() {
        let (g, a, b, c) = ids();
        let s = SearchState::start(a)
            .advance(b, Direction::Right, 0)
            .advance(c, Direction::Bottom, 1);
        let p = s.into_path(&g);
        assert_eq!(p.nodes(), &[0, 1, 2]);
        assert_eq!(p.turns(), 1);
    }
}
