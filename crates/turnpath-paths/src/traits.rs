use std::fmt;
use std::hash::Hash;

use turnpath_core::{Graph, NodeId, Topology, TopologyError};

use crate::path::Path;

/// Errors raised by a search before it starts exploring.
///
/// Not finding a path is not an error: searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// The graph cannot be searched by direction.
    Topology(TopologyError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topology(e) => write!(f, "cannot search graph: {e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Topology(e) => Some(e),
        }
    }
}

impl From<TopologyError> for PathError {
    fn from(e: TopologyError) -> Self {
        Self::Topology(e)
    }
}

/// A path-finding algorithm over orientational graphs.
///
/// `is_goal(candidate, goal)` decides whether a reached value satisfies the
/// query, so goals may be matched approximately. `is_passable(value)` filters
/// candidates at search time; it may be called more than once for a value
/// reachable from several directions. Both should be pure.
pub trait PathFindingStrategy<T> {
    /// Search from `start` until a value satisfying `is_goal` is reached.
    ///
    /// Returns `Ok(None)` when every reachable state has been explored.
    fn find_path(
        &self,
        graph: &Graph<T>,
        start: &T,
        goal: &T,
        is_goal: &dyn Fn(&T, &T) -> bool,
        is_passable: &dyn Fn(&T) -> bool,
    ) -> Result<Option<Path<T>>, PathError>;
}

/// Where a search begins, once the common preconditions are checked.
pub(crate) enum Origin<T> {
    /// Answered without exploring.
    Settled(Option<Path<T>>),
    /// Explore from this node.
    Node(NodeId),
}

/// Checks shared by every strategy: the graph must be orientational, a
/// start that already satisfies the goal yields the one-node path, and a
/// start the graph has never seen is an isolated node.
pub(crate) fn origin<T: Eq + Hash + Clone>(
    graph: &Graph<T>,
    start: &T,
    goal: &T,
    is_goal: &dyn Fn(&T, &T) -> bool,
) -> Result<Origin<T>, PathError> {
    graph.ensure(Topology::Orientational)?;
    if is_goal(start, goal) {
        return Ok(Origin::Settled(Some(Path::new(vec![start.clone()], 0))));
    }
    Ok(match graph.node_id(start) {
        Some(id) => Origin::Node(id),
        None => Origin::Settled(None),
    })
}
