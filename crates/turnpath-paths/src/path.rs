use std::fmt;

use turnpath_core::{Graph, NodeId};

/// A discovered route: the visited values from start to goal, and how many
/// times the route changes direction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<T> {
    nodes: Vec<T>,
    turns: usize,
}

impl<T> Path<T> {
    /// Create a path from its node sequence and turn count.
    pub fn new(nodes: Vec<T>, turns: usize) -> Self {
        Self { nodes, turns }
    }

    /// Nodes from start to goal, both included.
    #[inline]
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Number of direction changes along the path.
    #[inline]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Whether the path has at least one node.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges walked (one less than the node count).
    #[inline]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Option<&T> {
        self.nodes.first()
    }

    #[inline]
    pub fn end(&self) -> Option<&T> {
        self.nodes.last()
    }

    /// Consume the path, returning its nodes.
    pub fn into_nodes(self) -> Vec<T> {
        self.nodes
    }

    /// Iterate over the nodes from start to goal.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.nodes.iter()
    }
}

impl<T: Clone> Path<T> {
    /// Resolve a sequence of handles against `graph`.
    ///
    /// Panics if a handle was not handed out by `graph`.
    pub(crate) fn from_ids(graph: &Graph<T>, ids: &[NodeId], turns: usize) -> Self {
        let nodes = ids.iter().map(|&id| graph[id].value().clone()).collect();
        Self { nodes, turns }
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{n}")?;
        }
        let plural = if self.turns == 1 { "" } else { "s" };
        write!(f, " ({} turn{plural})", self.turns)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use turnpath_core::Point;

    #[test]
    fn path_round_trip() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(1, 0)], 0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
